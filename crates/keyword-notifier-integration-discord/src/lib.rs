//! Discord Integration for Keyword Notifier
//!
//! Turns Discord `MESSAGE_CREATE` events into [`IncomingMessage`]s and feeds
//! them to a [`Dispatcher`] that keyword watchers subscribe to.
//!
//! # Usage
//!
//! ```rust,ignore
//! use keyword_notifier_integration_discord::{DiscordConfig, DiscordGateway};
//!
//! let gateway = DiscordGateway::new(DiscordConfig::new("your-bot-token"));
//! let _watcher = KeywordWatcher::start(gateway.dispatcher(), settings, notifier);
//! gateway.run(tokio::signal::ctrl_c()).await?;
//! ```
//!
//! [`IncomingMessage`]: keyword_notifier::IncomingMessage
//! [`Dispatcher`]: keyword_notifier::Dispatcher

mod config;
mod events;
mod gateway;

pub use config::DiscordConfig;
pub use events::GatewayEventParser;
pub use gateway::DiscordGateway;
