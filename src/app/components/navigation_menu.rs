//! Navigation menu
//!
//! [`menu_items`] turns the configured entries into link views; the
//! [`NavigationMenu`] component renders them as router links. The menu keeps
//! no selection state: highlighting comes from the `current_path` the caller
//! passes in.

use dioxus::prelude::*;

use crate::app::pages::routes::resolve_path;
use crate::domain::models::NavigationEntry;
use crate::shared::logging;

/// One rendered menu link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem<'a> {
    /// Rendering key (the entry label)
    pub key: &'a str,
    pub target: &'a str,
    pub glyph: &'static str,
    /// `None` when labels are hidden
    pub label: Option<&'a str>,
    pub active: bool,
}

/// Lazily map entries to menu items, preserving order
pub fn menu_items<'a>(
    entries: &'a [NavigationEntry],
    current_path: Option<&'a str>,
    show_labels: bool,
) -> impl Iterator<Item = MenuItem<'a>> + 'a {
    entries.iter().map(move |entry| MenuItem {
        key: entry.label(),
        target: entry.path(),
        glyph: entry.icon().glyph(),
        label: show_labels.then_some(entry.label()),
        active: current_path.is_some_and(|current| is_active_path(entry.path(), current)),
    })
}

/// Exact match, ignoring a single trailing slash
pub fn is_active_path(entry_path: &str, current_path: &str) -> bool {
    normalize(entry_path) == normalize(current_path)
}

fn normalize(path: &str) -> &str {
    // Drop query and fragment before comparing
    let path = path.split(['?', '#']).next().unwrap_or(path);
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

fn link_class(active: bool) -> &'static str {
    if active { "c-nav-menu__link is-active" } else { "c-nav-menu__link" }
}

#[component]
pub fn NavigationMenu(
    entries: Vec<NavigationEntry>,
    #[props(default)] current_path: String,
    #[props(default = true)] show_labels: bool,
) -> Element {
    // Empty means "location unknown": nothing is highlighted
    let current = (!current_path.is_empty()).then_some(current_path.as_str());
    logging::log_navigation_render(entries.len(), current);

    rsx! {
        nav { class: "c-nav-menu",
            ul { class: "c-nav-menu__list",
                for item in menu_items(&entries, current, show_labels) {
                    li {
                        key: "{item.key}",
                        class: "c-nav-menu__item",
                        title: "{item.key}",
                        Link {
                            to: resolve_path(item.target),
                            class: link_class(item.active),
                            span { class: "c-nav-menu__icon", "{item.glyph}" }
                            if let Some(label) = item.label {
                                span { class: "c-nav-menu__text", "{label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
