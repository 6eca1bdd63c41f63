// Custom Dioxus hooks
pub mod use_panel;
pub mod use_theme;

pub use use_panel::{use_panel, UsePanelReturn};
pub use use_theme::{apply_theme, use_theme, Theme};
