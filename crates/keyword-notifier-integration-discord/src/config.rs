//! Discord configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Discord message feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Discord bot token
    pub token: String,
    /// Whether messages written by bots are evaluated
    pub listen_to_bots: bool,
    /// Whether direct messages are evaluated
    pub listen_to_dms: bool,
}

impl DiscordConfig {
    /// Create a new Discord configuration with just a token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    pub fn with_bots(mut self, enable: bool) -> Self {
        self.listen_to_bots = enable;
        self
    }

    pub fn with_dms(mut self, enable: bool) -> Self {
        self.listen_to_dms = enable;
        self
    }

    /// Whether a message with these traits should reach the watchers
    pub fn accepts(&self, from_bot: bool, is_dm: bool) -> bool {
        (self.listen_to_bots || !from_bot) && (self.listen_to_dms || !is_dm)
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            listen_to_bots: false,
            listen_to_dms: true,
        }
    }
}
