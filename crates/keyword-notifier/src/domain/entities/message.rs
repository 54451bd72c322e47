//! Message Entity
//!
//! A chat message as delivered by an event source. Every field is optional
//! because upstream events can be partial; the matcher treats missing data as
//! a non-match.

use serde::{Deserialize, Serialize};

/// An incoming chat message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Platform-specific message ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Message text
    #[serde(default)]
    pub content: Option<String>,
    /// Server the message was posted in (absent for direct messages)
    #[serde(default)]
    pub guild_id: Option<String>,
    /// Channel the message was posted in
    #[serde(default)]
    pub channel_id: Option<String>,
    /// Author's display name, used for presentation only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
}

impl IncomingMessage {
    /// Create a message with content and no scope information
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn with_guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }

    pub fn with_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    pub fn with_author_name(mut self, author_name: impl Into<String>) -> Self {
        self.author_name = Some(author_name.into());
        self
    }

    /// Content if present and non-empty
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }
}
