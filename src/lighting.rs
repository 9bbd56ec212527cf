// Lighting definition lookup
// Maps a V2 lighting capability spec to its supported value set.
// The V2 resolver shows a Lighting menu only when this set is non-empty.

use serde::{Deserialize, Serialize};

/// Well-known V2 lighting implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightingKeyword {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "qmk_backlight")]
    QmkBacklight,
    #[serde(rename = "qmk_rgblight")]
    QmkRgblight,
    #[serde(rename = "qmk_backlight_rgblight")]
    QmkBacklightRgblight,
    #[serde(rename = "wt_rgb_backlight")]
    WtRgbBacklight,
    #[serde(rename = "wt_mono_backlight")]
    WtMonoBacklight,
}

/// A lighting control value a keyboard can expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LightingValue {
    BacklightBrightness,
    BacklightEffect,
    RgblightBrightness,
    RgblightEffect,
    RgblightEffectSpeed,
    RgblightColor,
}

/// Lighting capability spec as declared by a V2 definition: either a bare
/// keyword or an object extending one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LightingSpec {
    Keyword(LightingKeyword),
    Extended(ExtendedLighting),
}

/// Lighting spec that extends a keyword, optionally overriding the
/// supported value set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedLighting {
    pub extends: LightingKeyword,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_lighting_values: Option<Vec<LightingValue>>,
}

const BACKLIGHT_VALUES: &[LightingValue] = &[
    LightingValue::BacklightBrightness,
    LightingValue::BacklightEffect,
];

const RGBLIGHT_VALUES: &[LightingValue] = &[
    LightingValue::RgblightBrightness,
    LightingValue::RgblightEffect,
    LightingValue::RgblightEffectSpeed,
    LightingValue::RgblightColor,
];

const BACKLIGHT_RGBLIGHT_VALUES: &[LightingValue] = &[
    LightingValue::BacklightBrightness,
    LightingValue::BacklightEffect,
    LightingValue::RgblightBrightness,
    LightingValue::RgblightEffect,
    LightingValue::RgblightEffectSpeed,
    LightingValue::RgblightColor,
];

/// Lookup from a lighting spec to its supported value set
///
/// This is a seam: the resolver takes any implementation, so tests and
/// frontends with nonstandard lighting tables can substitute their own.
pub trait LightingLookup: Send + Sync {
    /// Supported value set for a lighting capability spec
    fn supported_values(&self, spec: &LightingSpec) -> Vec<LightingValue>;
}

/// Table-backed lookup for the standard QMK and Wilba Tech implementations
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardLighting;

impl StandardLighting {
    /// Supported values for a bare keyword
    pub fn keyword_values(keyword: LightingKeyword) -> &'static [LightingValue] {
        match keyword {
            LightingKeyword::None => &[],
            LightingKeyword::QmkBacklight | LightingKeyword::WtMonoBacklight => BACKLIGHT_VALUES,
            LightingKeyword::QmkRgblight | LightingKeyword::WtRgbBacklight => RGBLIGHT_VALUES,
            LightingKeyword::QmkBacklightRgblight => BACKLIGHT_RGBLIGHT_VALUES,
        }
    }
}

impl LightingLookup for StandardLighting {
    fn supported_values(&self, spec: &LightingSpec) -> Vec<LightingValue> {
        match spec {
            LightingSpec::Keyword(keyword) => Self::keyword_values(*keyword).to_vec(),
            // An explicit value list on the spec wins over the keyword table
            LightingSpec::Extended(ext) => match &ext.supported_lighting_values {
                Some(values) => values.clone(),
                None => Self::keyword_values(ext.extends).to_vec(),
            },
        }
    }
}
