// Menu descriptor types
// Resolved, display-ready handles for configurator panes

use crate::definition::CustomMenuSpec;
use crate::menu::builtin::BuiltinMenu;
use std::sync::Arc;

/// Stable identity of a resolved menu
///
/// Built-in menus are identified by their tag; custom menus by their position
/// in the source manifest, so two structurally identical specs at different
/// positions stay distinguishable and stable across re-resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    Builtin(BuiltinMenu),
    Custom(usize),
}

/// Opaque icon token
///
/// The resolver never interprets this; the presentation layer maps it to an
/// actual glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconHandle(&'static str);

impl IconHandle {
    pub(crate) const fn new(token: &'static str) -> Self {
        Self(token)
    }

    /// The raw icon token
    pub fn token(&self) -> &'static str {
        self.0
    }
}

/// Opaque pane handle
///
/// Tells the presentation layer which pane to instantiate; the resolver only
/// constructs it and passes it through.
#[derive(Debug, Clone, PartialEq)]
pub enum PaneHandle {
    /// A canonical client-defined pane
    Builtin(BuiltinMenu),
    /// A device-declared pane, carrying its control schema
    Custom(Arc<CustomMenuSpec>),
}

/// The resolved, display-ready handle for one configuration pane
#[derive(Debug, Clone, PartialEq)]
pub struct MenuDescriptor {
    pub id: MenuId,
    pub icon: IconHandle,
    pub title: String,
    pub pane: PaneHandle,
}
