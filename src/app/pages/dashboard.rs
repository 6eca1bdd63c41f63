use dioxus::prelude::*;

use crate::app::components::Card;
use crate::config;

#[component]
pub fn Dashboard() -> Element {
    let brand = &config::dashboard().brand;

    rsx! {
        section { class: "c-page",
            h2 { class: "c-page__title", "{brand.title}" }
            Card {
                interactive: true,
                p { class: "c-page__lead", "Welcome back. Pick a section from the panel to get started." }
            }
        }
    }
}

#[component]
pub fn Metrics() -> Element {
    rsx! {
        section { class: "c-page",
            h2 { class: "c-page__title", "Metrics" }
            Card {
                title: "No data sources".to_string(),
                p { "Metrics appear here once a data source is connected." }
            }
        }
    }
}

/// Read-only view of the active navigation config
#[component]
pub fn Settings() -> Element {
    let config = config::dashboard();

    rsx! {
        section { class: "c-page",
            h2 { class: "c-page__title", "Settings" }
            Card {
                title: "Navigation".to_string(),
                subtitle: format!("{} entries", config.entries.len()),
                table { class: "c-table",
                    thead {
                        tr {
                            th { "Icon" }
                            th { "Label" }
                            th { "Path" }
                        }
                    }
                    tbody {
                        for (label, path, glyph) in config.entries.iter().map(|e| (e.label(), e.path(), e.icon().glyph())) {
                            tr { key: "{label}",
                                td { "{glyph}" }
                                td { "{label}" }
                                td { code { "{path}" } }
                            }
                        }
                    }
                }
            }
            Card {
                title: "Panel".to_string(),
                p {
                    if config.shell.show_labels {
                        "Labels are shown next to icons."
                    } else {
                        "Icons only; labels appear as tooltips."
                    }
                }
            }
        }
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        section { class: "c-page",
            h2 { class: "c-page__title", "Profile" }
            Card {
                p { "No account is signed in." }
            }
        }
    }
}
