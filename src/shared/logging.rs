//! Structured logging module for the LSCS dashboard
//!
//! Provides consistent, contextual logging across the application.
//! Every event carries an `operation` field so logs can be filtered per concern.

use std::path::Path;

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    ConfigLoad,
    ConfigValidation,
    PanelToggle,
    NavigationRender,
    ActionActivation,
    Routing,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::ConfigLoad => "config_load",
            LogOperation::ConfigValidation => "config_validation",
            LogOperation::PanelToggle => "panel_toggle",
            LogOperation::NavigationRender => "navigation_render",
            LogOperation::ActionActivation => "action_activation",
            LogOperation::Routing => "routing",
        }
    }
}

/// Log config file load start
pub fn log_config_load_start(path: &Path) {
    tracing::info!(
        operation = LogOperation::ConfigLoad.as_str(),
        path = %path.display(),
        "Loading dashboard config"
    );
}

/// Log config file load success
pub fn log_config_loaded(path: &Path, entry_count: usize) {
    tracing::info!(
        operation = LogOperation::ConfigLoad.as_str(),
        path = %path.display(),
        entry_count = entry_count,
        "Dashboard config loaded"
    );
}

/// Log config validation failure
pub fn log_config_invalid(error: &str) {
    tracing::error!(
        operation = LogOperation::ConfigValidation.as_str(),
        error = error,
        "Dashboard config rejected"
    );
}

/// Log process-wide config installation
pub fn log_config_installed(entry_count: usize) {
    tracing::debug!(
        operation = LogOperation::ConfigLoad.as_str(),
        entry_count = entry_count,
        "Dashboard config installed"
    );
}

/// Log panel visibility change
pub fn log_panel_toggle(from: &str, to: &str) {
    tracing::debug!(
        operation = LogOperation::PanelToggle.as_str(),
        from = from,
        to = to,
        "Side panel toggled"
    );
}

/// Log navigation menu render
pub fn log_navigation_render(entry_count: usize, current_path: Option<&str>) {
    tracing::trace!(
        operation = LogOperation::NavigationRender.as_str(),
        entry_count = entry_count,
        current_path = current_path.unwrap_or(""),
        "Rendering navigation menu"
    );
}

/// Log footer action activation
pub fn log_action_activated(action_id: &str) {
    tracing::debug!(
        operation = LogOperation::ActionActivation.as_str(),
        action_id = action_id,
        "Footer action activated"
    );
}

/// Log footer action failure
pub fn log_action_failed(action_id: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::ActionActivation.as_str(),
        action_id = action_id,
        error = error,
        "Footer action failed"
    );
}

/// Log a path the router could not resolve
pub fn log_route_not_found(path: &str) {
    tracing::warn!(
        operation = LogOperation::Routing.as_str(),
        path = path,
        "No view for path"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::ConfigLoad.as_str(), "config_load");
        assert_eq!(LogOperation::ConfigValidation.as_str(), "config_validation");
        assert_eq!(LogOperation::PanelToggle.as_str(), "panel_toggle");
        assert_eq!(LogOperation::NavigationRender.as_str(), "navigation_render");
        assert_eq!(LogOperation::ActionActivation.as_str(), "action_activation");
        assert_eq!(LogOperation::Routing.as_str(), "routing");
    }
}
