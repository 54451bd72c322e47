//! Discord gateway event parsing
//!
//! Converts raw gateway payloads (as JSON) into domain messages. Used for
//! replayed or piped event streams; the live gateway goes through serenity.

use keyword_notifier::{DomainError, IncomingMessage};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DiscordConfig;

/// Parser for Discord gateway dispatch events
pub struct GatewayEventParser {
    config: DiscordConfig,
}

impl GatewayEventParser {
    pub fn new(config: DiscordConfig) -> Self {
        Self { config }
    }

    /// Parse a full gateway frame: `{ "op": 0, "t": "MESSAGE_CREATE", "d": { ... } }`
    pub fn parse_envelope(
        &self,
        envelope: &serde_json::Value,
    ) -> Result<Option<IncomingMessage>, DomainError> {
        let event_type = envelope
            .get("t")
            .and_then(|t| t.as_str())
            .ok_or_else(|| DomainError::Validation("Missing event type 't' in gateway frame".into()))?;

        let data = envelope
            .get("d")
            .ok_or_else(|| DomainError::Validation("Missing event data 'd' in gateway frame".into()))?;

        self.parse_gateway_event(event_type, data)
    }

    /// Parse a Discord gateway event into a message, if it carries one
    pub fn parse_gateway_event(
        &self,
        event_type: &str,
        data: &serde_json::Value,
    ) -> Result<Option<IncomingMessage>, DomainError> {
        match event_type {
            "MESSAGE_CREATE" => self.parse_message_create(data),
            _ => {
                debug!(event_type = %event_type, "Ignoring Discord gateway event");
                Ok(None)
            }
        }
    }

    fn parse_message_create(
        &self,
        data: &serde_json::Value,
    ) -> Result<Option<IncomingMessage>, DomainError> {
        let msg: DiscordMessage = serde_json::from_value(data.clone())
            .map_err(|e| DomainError::Validation(format!("Invalid MESSAGE_CREATE: {}", e)))?;

        let from_bot = msg.author.bot.unwrap_or(false);
        let is_dm = msg.guild_id.is_none();
        if !self.config.accepts(from_bot, is_dm) {
            debug!(message_id = %msg.id, from_bot, is_dm, "Skipping Discord message");
            return Ok(None);
        }

        Ok(Some(IncomingMessage {
            id: Some(msg.id),
            content: msg.content,
            guild_id: msg.guild_id,
            channel_id: Some(msg.channel_id),
            author_name: Some(msg.author.username),
        }))
    }
}

impl Default for GatewayEventParser {
    fn default() -> Self {
        Self::new(DiscordConfig::default())
    }
}

// Internal types for parsing Discord events

#[derive(Debug, Deserialize, Serialize)]
struct DiscordMessage {
    id: String,
    channel_id: String,
    guild_id: Option<String>,
    author: DiscordUser,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
struct DiscordUser {
    username: String,
    bot: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn message_payload(bot: bool, guild_id: Option<&str>) -> serde_json::Value {
        serde_json::json!({
            "id": "123",
            "channel_id": "456",
            "guild_id": guild_id,
            "author": {
                "id": "user123",
                "username": "testuser",
                "bot": bot
            },
            "content": "Hello, dragon!"
        })
    }

    #[test]
    fn test_parse_message_create() {
        let parser = GatewayEventParser::default();
        let event = parser
            .parse_gateway_event("MESSAGE_CREATE", &message_payload(false, Some("789")))
            .unwrap();

        assert_eq!(
            event,
            Some(IncomingMessage {
                id: Some("123".into()),
                content: Some("Hello, dragon!".into()),
                guild_id: Some("789".into()),
                channel_id: Some("456".into()),
                author_name: Some("testuser".into()),
            })
        );
    }

    #[test]
    fn test_ignore_bot_messages() {
        let parser = GatewayEventParser::default();
        let event = parser
            .parse_gateway_event("MESSAGE_CREATE", &message_payload(true, Some("789")))
            .unwrap();
        assert!(event.is_none());

        let parser = GatewayEventParser::new(DiscordConfig::default().with_bots(true));
        let event = parser
            .parse_gateway_event("MESSAGE_CREATE", &message_payload(true, Some("789")))
            .unwrap();
        assert!(event.is_some());
    }

    #[test]
    fn test_parse_dm() {
        let parser = GatewayEventParser::default();
        let event = parser
            .parse_gateway_event("MESSAGE_CREATE", &message_payload(false, None))
            .unwrap()
            .expect("DMs are accepted by default");
        assert_eq!(event.guild_id, None);
        assert_eq!(event.channel_id.as_deref(), Some("456"));

        let parser = GatewayEventParser::new(DiscordConfig::default().with_dms(false));
        let event = parser
            .parse_gateway_event("MESSAGE_CREATE", &message_payload(false, None))
            .unwrap();
        assert!(event.is_none());
    }

    #[test]
    fn test_missing_content_is_kept_as_none() {
        let parser = GatewayEventParser::default();
        let data = serde_json::json!({
            "id": "1",
            "channel_id": "2",
            "guild_id": "3",
            "author": { "id": "u", "username": "n" }
        });
        let event = parser.parse_gateway_event("MESSAGE_CREATE", &data).unwrap().unwrap();
        assert_eq!(event.content, None);
    }

    #[test]
    fn test_author_needs_only_username() {
        let parser = GatewayEventParser::default();
        let data = serde_json::json!({
            "id": "1",
            "channel_id": "2",
            "guild_id": "3",
            "author": { "username": "zef" },
            "content": "dragon"
        });
        let event = parser.parse_gateway_event("MESSAGE_CREATE", &data).unwrap().unwrap();
        assert_eq!(event.author_name.as_deref(), Some("zef"));
    }

    #[test]
    fn test_other_events_are_ignored() {
        let parser = GatewayEventParser::default();
        let event = parser
            .parse_gateway_event("TYPING_START", &serde_json::json!({}))
            .unwrap();
        assert!(event.is_none());
    }

    #[test]
    fn test_parse_envelope() {
        let parser = GatewayEventParser::default();
        let frame = serde_json::json!({
            "op": 0,
            "t": "MESSAGE_CREATE",
            "d": message_payload(false, Some("789"))
        });
        let event = parser.parse_envelope(&frame).unwrap().unwrap();
        assert_eq!(event.content.as_deref(), Some("Hello, dragon!"));

        assert!(parser.parse_envelope(&serde_json::json!({ "op": 11 })).is_err());
    }

    #[test]
    fn test_malformed_message_is_validation_error() {
        let parser = GatewayEventParser::default();
        let result = parser.parse_gateway_event("MESSAGE_CREATE", &serde_json::json!({ "id": 5 }));
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
