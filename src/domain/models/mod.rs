// Domain models
// Pure Rust, no framework dependencies

pub mod action;
pub mod navigation;
pub mod panel;
pub mod theme;

pub use action::{Action, ActionError, ActionKind, ActionOutcome, FooterAction, FooterGroup};
pub use navigation::{IconId, NavigationEntry};
pub use panel::PanelVisibility;
pub use theme::Theme;
