// Built-in menu registry
// Closed set of canonical configurator panes and their identifier lookup

use super::descriptor::{IconHandle, MenuDescriptor, MenuId, PaneHandle};

/// Composite wildcard identifier: expands to Keymap, Macros, SaveLoad in
/// that order, as a one-entry alias for the default built-in set
pub const WILDCARD_ID: &str = "via/*";

/// Canonical built-in configurator menus
///
/// A closed set: every tag dispatches exhaustively, so "unrecognized
/// identifier" can only arise from a genuinely unknown manifest string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinMenu {
    Keymap,
    Layouts,
    Macros,
    Lighting,
    SaveLoad,
    /// Device-class-specific pane for boards with a rotary encoder
    RotaryEncoder,
}

impl BuiltinMenu {
    pub const ALL: [BuiltinMenu; 6] = [
        BuiltinMenu::Keymap,
        BuiltinMenu::Layouts,
        BuiltinMenu::Macros,
        BuiltinMenu::Lighting,
        BuiltinMenu::SaveLoad,
        BuiltinMenu::RotaryEncoder,
    ];

    /// Canonical identifier used in V3 menu manifests
    pub fn id(self) -> &'static str {
        match self {
            BuiltinMenu::Keymap => "via/keymap",
            BuiltinMenu::Layouts => "via/layouts",
            BuiltinMenu::Macros => "via/macros",
            BuiltinMenu::Lighting => "via/lighting",
            BuiltinMenu::SaveLoad => "via/save_load",
            BuiltinMenu::RotaryEncoder => "via/rotary_encoder",
        }
    }

    /// Look up a built-in menu by its canonical identifier
    ///
    /// The wildcard is not a menu; callers handle [`WILDCARD_ID`] before
    /// this lookup.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|menu| menu.id() == id)
    }

    /// Display title for the pane
    pub fn title(self) -> &'static str {
        match self {
            BuiltinMenu::Keymap => "Keymap",
            BuiltinMenu::Layouts => "Layouts",
            BuiltinMenu::Macros => "Macros",
            BuiltinMenu::Lighting => "Lighting",
            BuiltinMenu::SaveLoad => "Save + Load",
            BuiltinMenu::RotaryEncoder => "Rotary Encoder",
        }
    }

    fn icon_token(self) -> &'static str {
        match self {
            BuiltinMenu::Keymap => "keyboard",
            BuiltinMenu::Layouts => "grid",
            BuiltinMenu::Macros => "code",
            BuiltinMenu::Lighting => "lightbulb",
            BuiltinMenu::SaveLoad => "save",
            BuiltinMenu::RotaryEncoder => "dial",
        }
    }

    /// Mint the display-ready descriptor for this menu
    pub fn descriptor(self) -> MenuDescriptor {
        MenuDescriptor {
            id: MenuId::Builtin(self),
            icon: IconHandle::new(self.icon_token()),
            title: self.title().to_string(),
            pane: PaneHandle::Builtin(self),
        }
    }
}

/// Expansion of the composite wildcard, in authored order
pub const fn wildcard_expansion() -> [BuiltinMenu; 3] {
    [BuiltinMenu::Keymap, BuiltinMenu::Macros, BuiltinMenu::SaveLoad]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for menu in BuiltinMenu::ALL {
            assert_eq!(BuiltinMenu::from_id(menu.id()), Some(menu));
        }
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(BuiltinMenu::from_id("via/underglow"), None);
        assert_eq!(BuiltinMenu::from_id(""), None);
        // The wildcard is handled before registry lookup, never by it
        assert_eq!(BuiltinMenu::from_id(WILDCARD_ID), None);
    }

    #[test]
    fn test_wildcard_expansion_order() {
        assert_eq!(
            wildcard_expansion(),
            [
                BuiltinMenu::Keymap,
                BuiltinMenu::Macros,
                BuiltinMenu::SaveLoad
            ]
        );
    }

    #[test]
    fn test_descriptor_identity() {
        for menu in BuiltinMenu::ALL {
            let descriptor = menu.descriptor();
            assert_eq!(descriptor.id, MenuId::Builtin(menu));
            assert_eq!(descriptor.title, menu.title());
            assert_eq!(descriptor.pane, PaneHandle::Builtin(menu));
        }
    }
}
