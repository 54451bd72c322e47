//! Event Source Port
//!
//! A feed of incoming messages that callbacks can subscribe to and
//! unsubscribe from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::IncomingMessage;

/// Receives messages from an event source
pub trait MessageHandler: Send + Sync {
    fn on_message(&self, message: &IncomingMessage);
}

/// Handle returned by [`EventSource::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Message feed interface
///
/// # Example
///
/// ```rust,ignore
/// let id = source.subscribe(Arc::new(MyHandler));
/// // ... messages arrive ...
/// source.unsubscribe(id);
/// ```
pub trait EventSource: Send + Sync {
    /// Register a handler; it receives every message delivered afterwards
    fn subscribe(&self, handler: Arc<dyn MessageHandler>) -> SubscriptionId;

    /// Deregister a handler. Returns `false` if it was not subscribed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
