// Menu resolution module
// Turns a capability definition plus feature flags into the ordered menu list

pub mod builtin;
pub mod custom;
pub mod descriptor;
pub mod resolver;

pub use builtin::{BuiltinMenu, WILDCARD_ID};
pub use custom::{make_custom_menu, make_custom_menus};
pub use descriptor::{IconHandle, MenuDescriptor, MenuId, PaneHandle};
pub use resolver::{FeatureFlags, MenuResolver};
