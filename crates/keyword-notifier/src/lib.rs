//! Keyword Notifier Domain Library
//!
//! Core types and the matching engine for a client-side keyword notifier.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure entities and logic
//!   - `entities/`: Settings, IncomingMessage, KeywordAlert
//!   - `value_objects/`: Immutable value types (KeywordList, ScopeFilter, MatchResult)
//!   - `services/`: The pure `KeywordMatcher` and its negation guard
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `EventSource`, `SettingsStore`, `Notifier`
//!
//! - **Application** (`application/`): Glue around the matcher
//!   - `Dispatcher`: in-process event feed
//!   - `SettingsService`: shared settings with persist-on-change
//!   - `KeywordWatcher`: start/stop context binding matcher, settings and notifier
//!
//! # Usage
//!
//! ```rust
//! use keyword_notifier::{IncomingMessage, KeywordMatcher, Settings};
//!
//! let settings = Settings::default();
//! let message = IncomingMessage::new("Dragon spotted near the gate")
//!     .with_guild_id("1")
//!     .with_channel_id("2");
//!
//! let result = KeywordMatcher::evaluate(&settings, &message);
//! assert_eq!(result.keyword(), Some("Dragon"));
//! ```

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use adapters::InMemorySettingsStore;
pub use application::{Dispatcher, KeywordWatcher, SettingsService};
pub use domain::{
    DomainError, IncomingMessage, Keyword, KeywordAlert, KeywordList, KeywordMatcher,
    MatchResult, NegationGuard, ScopeFilter, Settings, SettingsField,
};
pub use ports::{EventSource, MessageHandler, Notifier, SettingsStore, SubscriptionId};
