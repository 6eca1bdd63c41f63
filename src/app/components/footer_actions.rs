use dioxus::prelude::*;

use crate::domain::models::{Action, ActionOutcome, FooterAction, FooterGroup};
use crate::shared::logging;

/// Panel footer: grouped action buttons.
///
/// Activation results are handed to `on_outcome`; failed activations are
/// logged and dropped.
#[component]
pub fn FooterActions(
    groups: Vec<FooterGroup>,
    #[props(default = true)] show_labels: bool,
    on_outcome: EventHandler<ActionOutcome>,
) -> Element {
    rsx! {
        div { class: "c-panel-footer",
            for (index, group) in groups.into_iter().enumerate() {
                if index > 0 {
                    hr { class: "c-panel-footer__separator" }
                }
                div { class: "c-panel-footer__group",
                    if let Some(label) = group.label {
                        div { class: "c-panel-footer__group-label", "{label}" }
                    }
                    ul { class: "c-panel-footer__list",
                        for action in group.actions {
                            FooterActionButton {
                                key: "{action.id}",
                                action: action.clone(),
                                show_labels,
                                on_outcome,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FooterActionButton(
    action: FooterAction,
    show_labels: bool,
    on_outcome: EventHandler<ActionOutcome>,
) -> Element {
    let glyph = action.icon().glyph();
    let label = action.label().to_string();

    let activate = move |_| {
        logging::log_action_activated(action.id());
        match action.activate() {
            Ok(outcome) => on_outcome.call(outcome),
            Err(e) => logging::log_action_failed(action.id(), &e.to_string()),
        }
    };

    rsx! {
        li { class: "c-panel-footer__item",
            button {
                class: "c-panel-footer__button",
                title: "{label}",
                onclick: activate,
                span { class: "c-panel-footer__icon", "{glyph}" }
                if show_labels {
                    span { class: "c-panel-footer__text", "{label}" }
                }
            }
        }
    }
}
