use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::models::ActionError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Action error: {0}")]
    Action(#[from] ActionError),

    #[error("Route not found: {0}")]
    RouteNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_config_error_message() {
        let err: AppError = ConfigError::EmptyTitle.into();
        assert_eq!(err.to_string(), "Configuration error: Brand title must not be empty");
    }

    #[test]
    fn test_wraps_action_error_message() {
        let err: AppError = ActionError::Unavailable { id: "logout".to_string() }.into();
        assert_eq!(err.to_string(), "Action error: Action 'logout' has no handler attached");
    }
}
