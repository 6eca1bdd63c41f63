//! Validate a dashboard navigation config and print the resulting menu.
//!
//! Run with: cargo run --bin navcheck -- --config assets/navigation.json --current /dashboard

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;

    use lscs_dashboard::app::components::menu_items;
    use lscs_dashboard::config::{self, DashboardConfig};
    use lscs_dashboard::domain::models::Action;

    #[derive(Parser, Debug)]
    #[command(name = "navcheck", about = "Validate an LSCS dashboard navigation config")]
    pub struct Args {
        /// Config file (defaults to $LSCS_NAV_CONFIG, then the builtin config)
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Current location, used to mark the active entry
        #[arg(long)]
        pub current: Option<String>,
    }

    pub fn run(args: Args) -> anyhow::Result<()> {
        let dashboard_config = match &args.config {
            Some(path) => DashboardConfig::from_path(path)
                .with_context(|| format!("Invalid navigation config {}", path.display()))?,
            None => config::load_from_env().context("Invalid navigation config")?,
        };

        println!("{}", dashboard_config.brand.title);
        for item in menu_items(
            &dashboard_config.entries,
            args.current.as_deref(),
            dashboard_config.shell.show_labels,
        ) {
            let marker = if item.active { "*" } else { " " };
            println!("{marker} {} {:<20} -> {}", item.glyph, item.key, item.target);
        }

        for group in &dashboard_config.footer {
            println!("[{}]", group.label.as_deref().unwrap_or("-"));
            for action in &group.actions {
                println!("  {} {} ({})", action.icon().glyph(), action.label(), action.id());
            }
        }

        tracing::info!(
            entry_count = dashboard_config.entries.len(),
            "Navigation config is valid"
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    cli::run(cli::Args::parse())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
