// Menu resolver
// The sole entry point: definition + feature flags -> ordered menu list

use super::builtin::{wildcard_expansion, BuiltinMenu, WILDCARD_ID};
use super::custom::make_custom_menu;
use super::descriptor::{MenuDescriptor, MenuId};
use crate::definition::{DefinitionV2, DefinitionV3, KeyboardDefinition, MenuEntry};
use crate::error::MenuError;
use crate::lighting::{LightingLookup, StandardLighting};
use std::sync::Arc;
use tracing::{debug, trace};

/// Runtime feature flags gating menu inclusion independent of device
/// capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Whether macro editing is enabled in this runtime
    pub macros_supported: bool,
}

impl Default for FeatureFlags {
    /// Macro editing is on unless the runtime disables it
    fn default() -> Self {
        Self {
            macros_supported: true,
        }
    }
}

/// Resolves the configurator menu list for a selected keyboard definition
///
/// Resolution is synchronous pure computation over the definition, the flags,
/// and the resolver's immutable lighting table; re-resolving unchanged inputs
/// yields a list-equal result, so callers may memoize freely.
pub struct MenuResolver {
    lighting: Arc<dyn LightingLookup>,
}

impl MenuResolver {
    /// Resolver with the standard lighting table
    pub fn new() -> Self {
        Self::with_lighting(Arc::new(StandardLighting))
    }

    /// Resolver with a caller-supplied lighting lookup
    pub fn with_lighting(lighting: Arc<dyn LightingLookup>) -> Self {
        Self { lighting }
    }

    /// Resolve the ordered, de-duplicated menu list for a definition
    ///
    /// No selected definition resolves to an empty list; the presentation
    /// layer shows its searching/loading affordance for that case. The only
    /// failure is a V3 manifest naming an identifier this client does not
    /// recognize.
    pub fn resolve(
        &self,
        definition: Option<&KeyboardDefinition>,
        flags: &FeatureFlags,
    ) -> Result<Vec<MenuDescriptor>, MenuError> {
        let mut rows = match definition {
            None => {
                debug!("no definition selected, resolving empty menu list");
                return Ok(Vec::new());
            }
            Some(KeyboardDefinition::V2(def)) => self.resolve_v2(def, flags),
            Some(KeyboardDefinition::V3(def)) => self.resolve_v3(def, flags)?,
        };

        dedup_by_id(&mut rows);
        debug!(count = rows.len(), "resolved menu list");
        Ok(rows)
    }

    /// V2 resolution: fixed inclusion predicates, additive, SaveLoad last
    fn resolve_v2(&self, def: &DefinitionV2, flags: &FeatureFlags) -> Vec<MenuDescriptor> {
        let mut rows = vec![BuiltinMenu::Keymap.descriptor()];

        if def.layouts.has_options() {
            rows.push(BuiltinMenu::Layouts.descriptor());
        }
        if flags.macros_supported {
            rows.push(BuiltinMenu::Macros.descriptor());
        }
        if let Some(lighting) = &def.lighting {
            let values = self.lighting.supported_values(lighting);
            trace!(values = values.len(), "lighting value set");
            if !values.is_empty() {
                rows.push(BuiltinMenu::Lighting.descriptor());
            }
        }
        if let Some(features) = &def.custom_features {
            if features.contains(&crate::definition::CustomFeature::RotaryEncoder) {
                rows.push(BuiltinMenu::RotaryEncoder.descriptor());
            }
        }
        rows.push(BuiltinMenu::SaveLoad.descriptor());

        rows
    }

    /// V3 resolution: expand the manifest in authored order, then filter
    ///
    /// Filtering happens after expansion so the relative order of surviving
    /// entries is exactly the manifest's navigation order. Unlike V2 there is
    /// no guaranteed SaveLoad placement: the manifest author controls it.
    fn resolve_v3(
        &self,
        def: &DefinitionV3,
        flags: &FeatureFlags,
    ) -> Result<Vec<MenuDescriptor>, MenuError> {
        let mut rows = Vec::with_capacity(def.menus.len() + 2);

        for (idx, entry) in def.menus.iter().enumerate() {
            match entry {
                MenuEntry::Builtin(id) if id == WILDCARD_ID => {
                    rows.extend(wildcard_expansion().into_iter().map(BuiltinMenu::descriptor));
                }
                MenuEntry::Builtin(id) => match BuiltinMenu::from_id(id) {
                    Some(menu) => rows.push(menu.descriptor()),
                    None => {
                        return Err(MenuError::UnrecognizedMenuReference(id.clone()));
                    }
                },
                MenuEntry::Custom(spec) => rows.push(make_custom_menu(spec, idx)),
            }
        }

        // Layouts is inferred from optionKeys; Macros from the runtime flag
        let mut removed: Vec<BuiltinMenu> = Vec::new();
        if !def.layouts.has_options() {
            removed.push(BuiltinMenu::Layouts);
        }
        if !flags.macros_supported {
            removed.push(BuiltinMenu::Macros);
        }
        if !removed.is_empty() {
            trace!(?removed, "filtering expanded manifest");
            rows.retain(|row| !matches!(row.id, MenuId::Builtin(menu) if removed.contains(&menu)));
        }

        Ok(rows)
    }
}

impl Default for MenuResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop later occurrences of an already-seen identifier, preserving order
fn dedup_by_id(rows: &mut Vec<MenuDescriptor>) {
    let mut seen: Vec<MenuId> = Vec::with_capacity(rows.len());
    rows.retain(|row| {
        if seen.contains(&row.id) {
            false
        } else {
            seen.push(row.id);
            true
        }
    });
}
