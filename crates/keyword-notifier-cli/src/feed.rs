//! Newline-delimited JSON message feed
//!
//! Each line is either a Discord gateway frame (`{"t": "MESSAGE_CREATE", "d": {...}}`)
//! or a bare message object (`{"content": "...", "guild_id": "...", "channel_id": "..."}`).

use anyhow::{Context, Result};
use keyword_notifier::{Dispatcher, IncomingMessage};
use keyword_notifier_integration_discord::GatewayEventParser;

/// Parse one feed line. Blank lines and non-message events yield `None`.
pub fn parse_line(parser: &GatewayEventParser, line: &str) -> Result<Option<IncomingMessage>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let value: serde_json::Value = serde_json::from_str(line).context("Invalid JSON")?;

    if value.get("t").is_some() {
        return Ok(parser.parse_envelope(&value)?);
    }

    let message = serde_json::from_value(value).context("Invalid message object")?;
    Ok(Some(message))
}

/// Parse one feed line and hand any message to the dispatcher.
/// Returns how many subscribers received it.
pub fn dispatch_line(
    parser: &GatewayEventParser,
    dispatcher: &Dispatcher,
    line: &str,
) -> Result<usize> {
    match parse_line(parser, line)? {
        Some(message) => Ok(dispatcher.dispatch(&message)),
        None => Ok(0),
    }
}
