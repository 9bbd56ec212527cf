// Capability definition types
// Device-declared data describing which configuration features and menus
// a keyboard supports

use crate::lighting::LightingSpec;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Layout section of a definition
///
/// Only `optionKeys` matters for menu resolution: a non-empty mapping means
/// the keyboard has selectable layout variants and gets a Layouts menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    #[serde(default, rename = "optionKeys")]
    pub option_keys: BTreeMap<String, Value>,
}

impl LayoutOptions {
    /// Whether the keyboard declares any layout options
    pub fn has_options(&self) -> bool {
        !self.option_keys.is_empty()
    }
}

/// Custom feature tags a V2 definition can declare
///
/// Tags this client does not interpret are preserved, not rejected: a device
/// may advertise features only other frontends understand, and resolution
/// simply skips them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CustomFeature {
    /// Device has a configurable rotary encoder pane
    RotaryEncoder,
    /// A tag with no pane in this client
    Other(String),
}

impl CustomFeature {
    const ROTARY_ENCODER_TAG: &'static str = "rotary-encoder";
}

impl From<String> for CustomFeature {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            CustomFeature::ROTARY_ENCODER_TAG => CustomFeature::RotaryEncoder,
            _ => CustomFeature::Other(tag),
        }
    }
}

impl From<CustomFeature> for String {
    fn from(feature: CustomFeature) -> Self {
        match feature {
            CustomFeature::RotaryEncoder => CustomFeature::ROTARY_ENCODER_TAG.to_string(),
            CustomFeature::Other(tag) => tag,
        }
    }
}

/// Legacy V2 capability definition
///
/// Menu inclusion is derived from fixed predicates over these fields; V2 has
/// no explicit menu manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionV2 {
    #[serde(default)]
    pub layouts: LayoutOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lighting: Option<LightingSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_features: Option<Vec<CustomFeature>>,
}

/// One entry in a V3 menu manifest: a built-in identifier string or an
/// inline custom menu specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuEntry {
    Builtin(String),
    Custom(CustomMenuSpec),
}

/// Device-declared description of one non-standard configuration surface
///
/// `content` is the backing control schema; the resolver treats it as an
/// opaque payload and passes it through on the pane handle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomMenuSpec {
    pub label: String,
    #[serde(default)]
    pub content: Vec<Value>,
}

/// Manifest-based V3 capability definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefinitionV3 {
    #[serde(default)]
    pub layouts: LayoutOptions,
    #[serde(default)]
    pub menus: Vec<MenuEntry>,
}

/// A versioned, device-declared capability definition
///
/// Produced once per connected device and immutable for the duration of a
/// resolution. "No device selected" is `None` at the call seam.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyboardDefinition {
    V2(DefinitionV2),
    V3(DefinitionV3),
}

/// Which descriptor schema applies to a selected definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionClass {
    V2,
    V3,
    None,
}

impl DefinitionClass {
    /// Classify a raw JSON document by its `version` discriminant.
    ///
    /// Unknown shapes classify to `None`; downstream that yields an empty
    /// menu list, not an error.
    pub fn of_value(value: &Value) -> DefinitionClass {
        match value.get("version").and_then(Value::as_u64) {
            Some(2) => DefinitionClass::V2,
            Some(3) => DefinitionClass::V3,
            _ => DefinitionClass::None,
        }
    }
}

/// Classify an optionally-selected definition
///
/// Pure predicate dispatch with no failure mode.
pub fn classify(definition: Option<&KeyboardDefinition>) -> DefinitionClass {
    match definition {
        Some(KeyboardDefinition::V2(_)) => DefinitionClass::V2,
        Some(KeyboardDefinition::V3(_)) => DefinitionClass::V3,
        None => DefinitionClass::None,
    }
}
