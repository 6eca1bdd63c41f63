//! LSCS dashboard - main entry point
//!
//! Server builds serve the fullstack app through `dioxus::serve()`; the
//! browser bundle and the native desktop build call `dioxus::launch()`.

use lscs_dashboard::app::App;

// Server entry point - dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    init_tracing();

    // Server and browser must render the same menu, so the server keeps the
    // builtin config that is also compiled into the WASM bundle.
    tracing::info!("Starting LSCS dashboard server...");

    dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] LSCS dashboard initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - config may be overridden from the environment
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use lscs_dashboard::config;

    init_tracing();

    let dashboard_config = config::load_from_env().with_context(|| {
        format!("Invalid navigation config (set via {})", config::CONFIG_ENV_VAR)
    })?;
    config::install(dashboard_config).context("Failed to install navigation config")?;

    dioxus::launch(App);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}
