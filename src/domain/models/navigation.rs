use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Icon identifiers understood by the glyph renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    Home,
    Users,
    Settings,
    Sun,
    Moon,
    LogOut,
    User,
    Activity,
}

impl IconId {
    pub const ALL: [IconId; 8] = [
        IconId::Home,
        IconId::Users,
        IconId::Settings,
        IconId::Sun,
        IconId::Moon,
        IconId::LogOut,
        IconId::User,
        IconId::Activity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconId::Home => "home",
            IconId::Users => "users",
            IconId::Settings => "settings",
            IconId::Sun => "sun",
            IconId::Moon => "moon",
            IconId::LogOut => "log-out",
            IconId::User => "user",
            IconId::Activity => "activity",
        }
    }

    /// Glyph shown in front of the label
    pub fn glyph(&self) -> &'static str {
        match self {
            IconId::Home => "🏠",
            IconId::Users => "👥",
            IconId::Settings => "⚙️",
            IconId::Sun => "☀️",
            IconId::Moon => "🌙",
            IconId::LogOut => "🚪",
            IconId::User => "👤",
            IconId::Activity => "📈",
        }
    }
}

impl FromStr for IconId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconId::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| format!("Unknown icon: {}", s))
    }
}

/// A single labeled, addressable destination shown in the menu.
///
/// Fields are private: entries are built once from configuration and
/// only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    label: String,
    path: String,
    icon: IconId,
}

impl NavigationEntry {
    pub fn new(label: impl Into<String>, path: impl Into<String>, icon: IconId) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn icon(&self) -> IconId {
        self.icon
    }
}
