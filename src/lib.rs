//! Configurator menu resolution for VIA-compatible keyboards
//!
//! Turns a device's versioned capability definition (legacy V2 or
//! manifest-based V3) plus runtime feature flags into the deterministic,
//! ordered, de-duplicated list of menu descriptors a configurator UI
//! presents. Resolution is pure synchronous computation; rendering panes,
//! persisting edits, and device transport are out of scope.
//!
//! The entry point is [`MenuResolver`]:
//!
//! ```
//! use via_menus::{FeatureFlags, KeyboardDefinition, MenuResolver};
//!
//! let definition = KeyboardDefinition::from_json(
//!     r#"{"version": 3, "menus": ["via/*"]}"#,
//! ).unwrap();
//!
//! let resolver = MenuResolver::new();
//! let menus = resolver
//!     .resolve(Some(&definition), &FeatureFlags::default())
//!     .unwrap();
//! assert_eq!(menus.len(), 3); // Keymap, Macros, Save + Load
//! ```

pub mod definition;
pub mod error;
pub mod lighting;
pub mod menu;

pub use definition::{
    classify, CustomFeature, CustomMenuSpec, DefinitionClass, DefinitionV2, DefinitionV3,
    KeyboardDefinition, LayoutOptions, MenuEntry,
};
pub use error::{DefinitionError, MenuError};
pub use lighting::{
    ExtendedLighting, LightingKeyword, LightingLookup, LightingSpec, LightingValue,
    StandardLighting,
};
pub use menu::{
    make_custom_menu, make_custom_menus, BuiltinMenu, FeatureFlags, IconHandle, MenuDescriptor,
    MenuId, MenuResolver, PaneHandle, WILDCARD_ID,
};
