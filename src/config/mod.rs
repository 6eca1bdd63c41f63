//! Dashboard configuration
//!
//! The navigation list is configuration-as-code: [`DashboardConfig::builtin`]
//! is the compiled-in default. A JSON file with the same shape can replace it
//! at startup; it is validated once and then installed for the rest of the
//! process lifetime.

use std::path::Path;

use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::models::{FooterAction, FooterGroup, IconId, NavigationEntry, Theme};
use crate::shared::logging;

/// Environment variable naming a config file that overrides the builtin one
pub const CONFIG_ENV_VAR: &str = "LSCS_NAV_CONFIG";

static INSTALLED: OnceCell<DashboardConfig> = OnceCell::new();
static BUILTIN: Lazy<DashboardConfig> = Lazy::new(DashboardConfig::builtin);

// Leading slash, non-empty segments, no whitespace, optional trailing slash
static PATH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(?:[^/\s]+(?:/[^/\s]+)*/?)?$").unwrap());

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Brand title must not be empty")]
    EmptyTitle,

    #[error("Navigation entry #{index} has an empty label")]
    EmptyLabel { index: usize },

    #[error("Duplicate navigation label '{label}' (entries #{first} and #{second})")]
    DuplicateLabel {
        label: String,
        first: usize,
        second: usize,
    },

    #[error("Malformed path '{path}' for '{label}': expected an absolute path like /dashboard/settings")]
    MalformedPath { label: String, path: String },

    #[error("Duplicate footer action id '{0}'")]
    DuplicateActionId(String),

    #[error("Dashboard config was already installed")]
    AlreadyInstalled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandConfig {
    pub title: String,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Presentation options for the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellOptions {
    #[serde(default = "default_show_labels")]
    pub show_labels: bool,
}

fn default_show_labels() -> bool {
    true
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self { show_labels: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub brand: BrandConfig,
    pub entries: Vec<NavigationEntry>,
    #[serde(default)]
    pub shell: ShellOptions,
    #[serde(default)]
    pub footer: Vec<FooterGroup>,
}

impl DashboardConfig {
    /// The compiled-in dashboard navigation
    pub fn builtin() -> Self {
        Self {
            brand: BrandConfig {
                title: "LSCS Core".to_string(),
                logo: Some("/lscs-logo.svg".to_string()),
            },
            entries: vec![
                NavigationEntry::new("Dashboard", "/dashboard", IconId::Home),
                NavigationEntry::new("Metrics", "/dashboard/metrics", IconId::Activity),
                NavigationEntry::new("Settings", "/dashboard/settings", IconId::Settings),
            ],
            shell: ShellOptions::default(),
            footer: vec![
                FooterGroup {
                    label: Some("Appearance".to_string()),
                    actions: vec![FooterAction::theme(Theme::Light), FooterAction::theme(Theme::Dark)],
                },
                FooterGroup {
                    label: None,
                    actions: vec![
                        FooterAction::navigate("profile", "Profile", IconId::User, "/dashboard/profile"),
                        FooterAction::unavailable("logout", "Logout", IconId::LogOut),
                    ],
                },
            ],
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        logging::log_config_load_start(path);
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&raw).inspect_err(|e| {
            logging::log_config_invalid(&e.to_string());
        })?;
        logging::log_config_loaded(path, config.entries.len());
        Ok(config)
    }

    /// Check label uniqueness and path shape for entries and footer actions
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.brand.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }

        for (index, entry) in self.entries.iter().enumerate() {
            if entry.label().trim().is_empty() {
                return Err(ConfigError::EmptyLabel { index });
            }
            if let Some(first) = self.entries[..index]
                .iter()
                .position(|other| other.label() == entry.label())
            {
                return Err(ConfigError::DuplicateLabel {
                    label: entry.label().to_string(),
                    first,
                    second: index,
                });
            }
            check_path(entry.label(), entry.path())?;
        }

        let mut seen_ids: Vec<&str> = Vec::new();
        for action in self.footer.iter().flat_map(|group| group.actions.iter()) {
            if seen_ids.contains(&action.id.as_str()) {
                return Err(ConfigError::DuplicateActionId(action.id.clone()));
            }
            seen_ids.push(&action.id);
            if let crate::domain::models::ActionKind::Navigate { path } = &action.kind {
                check_path(&action.label, path)?;
            }
        }

        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Whether `path` is an absolute route path
pub fn is_well_formed_path(path: &str) -> bool {
    PATH_PATTERN.is_match(path)
}

fn check_path(label: &str, path: &str) -> Result<(), ConfigError> {
    if is_well_formed_path(path) {
        Ok(())
    } else {
        Err(ConfigError::MalformedPath {
            label: label.to_string(),
            path: path.to_string(),
        })
    }
}

/// Install the process-wide config. Must run before launch; a second call fails.
pub fn install(config: DashboardConfig) -> Result<&'static DashboardConfig, ConfigError> {
    config.validate()?;
    let entry_count = config.entries.len();
    INSTALLED
        .set(config)
        .map_err(|_| ConfigError::AlreadyInstalled)?;
    logging::log_config_installed(entry_count);
    Ok(dashboard())
}

/// The installed config, or the builtin one when nothing was installed
pub fn dashboard() -> &'static DashboardConfig {
    INSTALLED.get().unwrap_or_else(|| Lazy::force(&BUILTIN))
}

/// Load the config named by [`CONFIG_ENV_VAR`], falling back to the builtin
pub fn load_from_env() -> Result<DashboardConfig, ConfigError> {
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => DashboardConfig::from_path(Path::new(&path)),
        _ => Ok(DashboardConfig::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED_CONFIG: &str = include_str!("../../assets/navigation.json");

    #[test]
    fn test_builtin_is_valid() {
        let config = DashboardConfig::builtin();
        assert!(config.validate().is_ok());
        let labels: Vec<&str> = config.entries.iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["Dashboard", "Metrics", "Settings"]);
    }

    #[test]
    fn test_shipped_json_matches_builtin() {
        let config = DashboardConfig::from_json_str(SHIPPED_CONFIG).unwrap();
        assert_eq!(config, DashboardConfig::builtin());
    }

    #[test]
    fn test_well_formed_paths() {
        assert!(is_well_formed_path("/"));
        assert!(is_well_formed_path("/dashboard"));
        assert!(is_well_formed_path("/dashboard/settings"));
        assert!(is_well_formed_path("/dashboard/settings/"));
    }

    #[test]
    fn test_malformed_paths() {
        assert!(!is_well_formed_path(""));
        assert!(!is_well_formed_path("dashboard"));
        assert!(!is_well_formed_path("//dashboard"));
        assert!(!is_well_formed_path("/dash board"));
        assert!(!is_well_formed_path("/dashboard//settings"));
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let mut config = DashboardConfig::builtin();
        config
            .entries
            .push(NavigationEntry::new("Metrics", "/dashboard/metrics-2", IconId::Activity));
        match config.validate() {
            Err(ConfigError::DuplicateLabel { label, first, second }) => {
                assert_eq!(label, "Metrics");
                assert_eq!(first, 1);
                assert_eq!(second, 3);
            }
            other => panic!("expected duplicate label error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_path_allowed() {
        let mut config = DashboardConfig::builtin();
        config
            .entries
            .push(NavigationEntry::new("Home", "/dashboard", IconId::Home));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_entry_path_rejected() {
        let raw = r#"{
            "brand": { "title": "LSCS Core" },
            "entries": [ { "label": "Metrics", "path": "metrics", "icon": "activity" } ]
        }"#;
        let err = DashboardConfig::from_json_str(raw).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedPath { .. }));
        assert!(err.to_string().contains("'metrics'"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut config = DashboardConfig::builtin();
        config.brand.title = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyTitle)));
    }

    #[test]
    fn test_duplicate_action_id_rejected() {
        let mut config = DashboardConfig::builtin();
        config.footer[0].actions.push(FooterAction::theme(Theme::Dark));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateActionId(id)) if id == "theme-dark"
        ));
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let raw = r#"{ "brand": { "title": "Ops" }, "entries": [] }"#;
        let config = DashboardConfig::from_json_str(raw).unwrap();
        assert!(config.entries.is_empty());
        assert!(config.shell.show_labels);
        assert!(config.footer.is_empty());
        assert_eq!(config.brand.logo, None);
    }

    #[test]
    fn test_unknown_icon_is_parse_error() {
        let raw = r#"{
            "brand": { "title": "Ops" },
            "entries": [ { "label": "X", "path": "/x", "icon": "rocket" } ]
        }"#;
        assert!(matches!(
            DashboardConfig::from_json_str(raw),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_install_only_once() {
        // The only test that touches the process-wide config
        let installed = install(DashboardConfig::builtin()).unwrap();
        assert_eq!(installed.brand.title, "LSCS Core");
        assert!(std::ptr::eq(installed, dashboard()));
        assert!(matches!(
            install(DashboardConfig::builtin()),
            Err(ConfigError::AlreadyInstalled)
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = DashboardConfig::from_path(Path::new("/nonexistent/nav.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/nav.json"));
    }
}
