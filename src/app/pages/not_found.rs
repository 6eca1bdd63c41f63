use dioxus::prelude::*;

use crate::app::pages::routes::Route;
use crate::shared::errors::AppError;
use crate::shared::logging;

/// Message for an unmatched path; the miss is logged once per mount
fn use_missing_route(segments: &[String]) -> String {
    let path = format!("/{}", segments.join("/"));
    use_hook(|| logging::log_route_not_found(&path));
    AppError::RouteNotFound(path).to_string()
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let message = use_missing_route(&segments);

    rsx! {
        section { class: "c-page c-page--not-found",
            h2 { class: "c-page__title", "Page not found" }
            p { class: "c-error__text", "{message}" }
            Link { to: Route::Dashboard {}, class: "c-button c-button--primary", "Back to dashboard" }
        }
    }
}
