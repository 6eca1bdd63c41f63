use dioxus::prelude::*;

use crate::domain::models::PanelVisibility;
use crate::shared::logging;

/// Panel visibility for one mounted shell plus its toggle
#[derive(Clone, Copy, PartialEq)]
pub struct UsePanelReturn {
    pub visibility: Signal<PanelVisibility>,
}

impl UsePanelReturn {
    pub fn is_open(&self) -> bool {
        (self.visibility)().is_open()
    }

    pub fn toggle(&mut self) {
        let from = (self.visibility)();
        let to = from.toggle();
        self.visibility.set(to);
        logging::log_panel_toggle(from.as_str(), to.as_str());
    }
}

/// Starts at [`PanelVisibility::Open`] on every mount.
///
/// An ancestor may provide a `UsePanelReturn` context to own the state
/// instead; the shell then follows that handle.
pub fn use_panel() -> UsePanelReturn {
    let visibility = use_signal(PanelVisibility::default);
    let provided = use_hook(try_consume_context::<UsePanelReturn>);
    provided.unwrap_or(UsePanelReturn { visibility })
}
