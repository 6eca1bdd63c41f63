use dioxus::document;
use dioxus::prelude::*;

use crate::app::layouts::PageShell;
use crate::app::pages::{Dashboard, Metrics, NotFound, Profile, Settings};
use crate::config::{self, DashboardConfig};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Dashboard {})]
    #[layout(DashboardLayout)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/dashboard/metrics")]
    Metrics {},
    #[route("/dashboard/settings")]
    Settings {},
    #[route("/dashboard/profile")]
    Profile {},

    // Anything else still gets the shell, with a "not found" view inside
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Resolve a configured path to a route; unknown paths land on [`Route::NotFound`]
pub fn resolve_path(path: &str) -> Route {
    path.parse::<Route>().unwrap_or_else(|_| Route::NotFound {
        segments: path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

#[component]
pub fn App() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    use_effect(|| {
        tracing::info!("LSCS dashboard initialized");
    });

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        }
        Router::<Route> {}
    }
}

/// Route layout: the page shell around the router outlet.
///
/// Uses a `DashboardConfig` context when an embedding parent provides one,
/// otherwise the process-wide config.
#[component]
fn DashboardLayout() -> Element {
    let config = use_hook(|| {
        try_consume_context::<DashboardConfig>().unwrap_or_else(|| config::dashboard().clone())
    });
    let route = use_route::<Route>();

    rsx! {
        PageShell {
            brand: config.brand.clone(),
            entries: config.entries.clone(),
            options: config.shell,
            footer: config.footer.clone(),
            current_path: route.to_string(),
            Outlet::<Route> {}
        }
    }
}
