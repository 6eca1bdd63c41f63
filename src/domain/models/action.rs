//! Footer actions
//!
//! Panel footer controls (theme switch, profile, logout) are modelled as
//! [`Action`] values so the shell can render and activate them without
//! knowing what they do.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{IconId, Theme};

/// What the shell should do after an action was activated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    ApplyTheme(Theme),
    Navigate(String),
}

/// Errors that can occur when activating an action
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("Action '{id}' has no handler attached")]
    Unavailable { id: String },
}

/// A control the shell can render and activate
pub trait Action {
    fn id(&self) -> &str;

    fn label(&self) -> &str;

    fn icon(&self) -> IconId;

    fn activate(&self) -> Result<ActionOutcome, ActionError>;
}

/// Behavior attached to a configured footer action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionKind {
    Theme { theme: Theme },
    Navigate { path: String },
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterAction {
    pub id: String,
    pub label: String,
    pub icon: IconId,
    pub kind: ActionKind,
}

impl FooterAction {
    pub fn theme(theme: Theme) -> Self {
        Self {
            id: format!("theme-{}", theme.as_str()),
            label: theme.display_name().to_string(),
            icon: if theme.is_dark() { IconId::Moon } else { IconId::Sun },
            kind: ActionKind::Theme { theme },
        }
    }

    pub fn navigate(id: &str, label: &str, icon: IconId, path: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon,
            kind: ActionKind::Navigate { path: path.to_string() },
        }
    }

    pub fn unavailable(id: &str, label: &str, icon: IconId) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon,
            kind: ActionKind::Unavailable,
        }
    }
}

impl Action for FooterAction {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn icon(&self) -> IconId {
        self.icon
    }

    fn activate(&self) -> Result<ActionOutcome, ActionError> {
        match &self.kind {
            ActionKind::Theme { theme } => Ok(ActionOutcome::ApplyTheme(*theme)),
            ActionKind::Navigate { path } => Ok(ActionOutcome::Navigate(path.clone())),
            ActionKind::Unavailable => Err(ActionError::Unavailable { id: self.id.clone() }),
        }
    }
}

/// A titled group of footer actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterGroup {
    #[serde(default)]
    pub label: Option<String>,
    pub actions: Vec<FooterAction>,
}
