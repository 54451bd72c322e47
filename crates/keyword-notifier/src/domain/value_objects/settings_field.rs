//! SettingsField - The three editable fields of the configuration surface

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::DomainError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SettingsField {
    Keywords,
    Servers,
    Channels,
}

impl SettingsField {
    /// All fields, in form order
    pub const ALL: [SettingsField; 3] = [Self::Keywords, Self::Servers, Self::Channels];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keywords => "keywords",
            Self::Servers => "servers",
            Self::Channels => "channels",
        }
    }

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Keywords => "Keywords",
            Self::Servers => "Server IDs",
            Self::Channels => "Channel IDs",
        }
    }

    /// Example input
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Keywords => "e.g. important,meeting,urgent",
            Self::Servers | Self::Channels => "e.g. 123456789,987654321",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            Self::Keywords => {
                "Keywords separated by commas. Case-insensitive, whole words only."
            }
            Self::Servers => {
                "Optional: server IDs separated by commas. Leave empty to listen in all servers."
            }
            Self::Channels => {
                "Optional: channel IDs separated by commas. Leave empty to listen in all channels."
            }
        }
    }
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingsField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keywords" => Ok(Self::Keywords),
            "servers" => Ok(Self::Servers),
            "channels" => Ok(Self::Channels),
            other => Err(DomainError::Validation(format!(
                "Unknown settings field '{}' (expected keywords, servers or channels)",
                other
            ))),
        }
    }
}
