// JSON definition loader
// Strict loading of V2/V3 definitions from JSON documents

use super::types::{DefinitionClass, DefinitionV2, DefinitionV3, KeyboardDefinition, MenuEntry};
use crate::error::DefinitionError;
use serde_json::Value;

impl KeyboardDefinition {
    /// Load a definition from a JSON string
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Load a definition from a parsed JSON document
    ///
    /// Unlike [`DefinitionClass::of_value`], this is the strict path: an
    /// unknown `version` is reported as an error so an eagerly-loading store
    /// gets a diagnosable failure instead of a silently empty menu list.
    pub fn from_value(value: Value) -> Result<Self, DefinitionError> {
        let definition = match DefinitionClass::of_value(&value) {
            DefinitionClass::V2 => {
                KeyboardDefinition::V2(serde_json::from_value::<DefinitionV2>(value)?)
            }
            DefinitionClass::V3 => {
                KeyboardDefinition::V3(serde_json::from_value::<DefinitionV3>(value)?)
            }
            DefinitionClass::None => {
                let version = value
                    .get("version")
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "missing".to_string());
                return Err(DefinitionError::UnsupportedVersion(version));
            }
        };
        definition.validate()?;
        Ok(definition)
    }

    /// Validate the definition data
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if let KeyboardDefinition::V3(def) = self {
            for (idx, entry) in def.menus.iter().enumerate() {
                if let MenuEntry::Custom(spec) = entry {
                    if spec.label.trim().is_empty() {
                        return Err(DefinitionError::Validation(format!(
                            "custom menu at manifest position {idx} has an empty label"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::types::CustomFeature;

    const V2_JSON: &str = r#"{
        "version": 2,
        "name": "Test 65%",
        "layouts": {
            "optionKeys": {
                "0": ["2,13", "3,13"]
            }
        },
        "lighting": "qmk_rgblight",
        "customFeatures": ["rotary-encoder"]
    }"#;

    const V3_JSON: &str = r#"{
        "version": 3,
        "name": "Test 65%",
        "layouts": {},
        "menus": [
            "via/keymap",
            {"label": "Underglow", "content": [{"type": "color", "label": "Color"}]},
            "via/save_load"
        ]
    }"#;

    #[test]
    fn test_load_v2() {
        let def = KeyboardDefinition::from_json(V2_JSON).unwrap();
        let KeyboardDefinition::V2(v2) = def else {
            panic!("expected V2");
        };

        assert!(v2.layouts.has_options());
        assert!(v2.lighting.is_some());
        assert_eq!(
            v2.custom_features,
            Some(vec![CustomFeature::RotaryEncoder])
        );
    }

    #[test]
    fn test_load_v3() {
        let def = KeyboardDefinition::from_json(V3_JSON).unwrap();
        let KeyboardDefinition::V3(v3) = def else {
            panic!("expected V3");
        };

        assert!(!v3.layouts.has_options());
        assert_eq!(v3.menus.len(), 3);
        assert_eq!(v3.menus[0], MenuEntry::Builtin("via/keymap".to_string()));
    }

    #[test]
    fn test_unsupported_version() {
        let result = KeyboardDefinition::from_json(r#"{"version": 9}"#);
        match result {
            Err(DefinitionError::UnsupportedVersion(v)) => assert_eq!(v, "9"),
            other => panic!("expected UnsupportedVersion, got {other:?}"),
        }

        let result = KeyboardDefinition::from_json(r#"{"name": "versionless"}"#);
        assert!(matches!(
            result,
            Err(DefinitionError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn test_validation_empty_custom_label() {
        let json = r#"{
            "version": 3,
            "menus": [{"label": "  ", "content": []}]
        }"#;

        let result = KeyboardDefinition::from_json(json);
        match result {
            Err(DefinitionError::Validation(msg)) => {
                assert!(msg.contains("position 0"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_absent_optional_fields() {
        // A minimal V2 definition parses with empty layouts and no lighting
        let def = KeyboardDefinition::from_json(r#"{"version": 2}"#).unwrap();
        let KeyboardDefinition::V2(v2) = def else {
            panic!("expected V2");
        };

        assert!(!v2.layouts.has_options());
        assert!(v2.lighting.is_none());
        assert!(v2.custom_features.is_none());
    }
}
