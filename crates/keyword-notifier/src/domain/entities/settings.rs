//! Settings Entity
//!
//! The flat settings record edited by the user. Fields are stored exactly as
//! typed so that a save/load round trip is lossless; parsed views are derived
//! on demand.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{KeywordList, ScopeFilter, SettingsField};

pub const DEFAULT_KEYWORDS: &str = "XZ,DD,Dragon";

/// User settings: three comma-separated free-text fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Keywords to watch for (comma-separated)
    #[serde(default)]
    pub keywords: String,
    /// Server (guild) IDs to restrict notifications to; empty = all servers
    #[serde(default)]
    pub servers: String,
    /// Channel IDs to restrict notifications to; empty = all channels
    #[serde(default)]
    pub channels: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.to_string(),
            servers: String::new(),
            channels: String::new(),
        }
    }
}

impl Settings {
    /// Create settings from the three raw fields
    pub fn new(
        keywords: impl Into<String>,
        servers: impl Into<String>,
        channels: impl Into<String>,
    ) -> Self {
        Self {
            keywords: keywords.into(),
            servers: servers.into(),
            channels: channels.into(),
        }
    }

    /// Parsed keyword list
    pub fn keyword_list(&self) -> KeywordList {
        KeywordList::parse(&self.keywords)
    }

    /// Parsed server allow-list
    pub fn server_filter(&self) -> ScopeFilter {
        ScopeFilter::parse(&self.servers)
    }

    /// Parsed channel allow-list
    pub fn channel_filter(&self) -> ScopeFilter {
        ScopeFilter::parse(&self.channels)
    }

    /// Raw value of a field
    pub fn get(&self, field: SettingsField) -> &str {
        match field {
            SettingsField::Keywords => &self.keywords,
            SettingsField::Servers => &self.servers,
            SettingsField::Channels => &self.channels,
        }
    }

    /// Replace the raw value of a field
    pub fn set(&mut self, field: SettingsField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SettingsField::Keywords => self.keywords = value,
            SettingsField::Servers => self.servers = value,
            SettingsField::Channels => self.channels = value,
        }
    }

    /// Non-fatal hints about the current configuration
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.keyword_list().is_empty() {
            warnings.push("No keywords configured - notifications will never fire".to_string());
        }
        warnings
    }
}
