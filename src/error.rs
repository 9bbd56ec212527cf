//! Menu resolution and definition loading error types

use thiserror::Error;

/// Errors from menu resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// A V3 manifest names a menu identifier the client does not know.
    ///
    /// This is fatal to the resolution: a manifest the device advertises but
    /// the client cannot interpret indicates a version mismatch the user or
    /// definition author must know about, so the entry is never silently
    /// dropped.
    #[error("unrecognized menu reference: {0:?}")]
    UnrecognizedMenuReference(String),
}

/// Errors from loading a keyboard definition from JSON
#[derive(Error, Debug)]
pub enum DefinitionError {
    /// The document is not valid JSON or does not match the schema
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The `version` discriminant is missing or not a supported schema version
    #[error("unsupported definition version: {0}")]
    UnsupportedVersion(String),

    /// The document parsed but carries inconsistent data
    #[error("validation error: {0}")]
    Validation(String),
}
