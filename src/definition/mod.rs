// Keyboard capability definition module
// Data model and JSON loading for V2/V3 device definitions

pub mod json;
pub mod types;

pub use types::{
    classify, CustomFeature, CustomMenuSpec, DefinitionClass, DefinitionV2, DefinitionV3,
    KeyboardDefinition, LayoutOptions, MenuEntry,
};
