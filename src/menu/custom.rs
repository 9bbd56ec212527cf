// Custom menu factory
// Mints descriptors for device-declared configuration surfaces

use super::descriptor::{IconHandle, MenuDescriptor, MenuId, PaneHandle};
use crate::definition::CustomMenuSpec;
use std::sync::Arc;

const CUSTOM_ICON: &str = "sliders";

/// Synthesize a descriptor for one custom menu specification
///
/// Identity is derived from `index` (the spec's position in its manifest), so
/// it is stable across re-resolution as long as manifest order is stable.
pub fn make_custom_menu(spec: &CustomMenuSpec, index: usize) -> MenuDescriptor {
    MenuDescriptor {
        id: MenuId::Custom(index),
        icon: IconHandle::new(CUSTOM_ICON),
        title: spec.label.clone(),
        pane: PaneHandle::Custom(Arc::new(spec.clone())),
    }
}

/// Apply [`make_custom_menu`] positionally over a sequence of specs
///
/// Used to build a custom menu pool independent of any specific device
/// manifest.
pub fn make_custom_menus(specs: &[CustomMenuSpec]) -> Vec<MenuDescriptor> {
    specs
        .iter()
        .enumerate()
        .map(|(index, spec)| make_custom_menu(spec, index))
        .collect()
}
