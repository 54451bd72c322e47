//! In-process message dispatcher
//!
//! An [`EventSource`] that adapters push messages into. Handlers are called
//! synchronously, in subscription order, outside the registry lock so that a
//! handler may unsubscribe itself.

use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

use crate::domain::entities::IncomingMessage;
use crate::ports::{EventSource, MessageHandler, SubscriptionId};

type Subscription = (SubscriptionId, Arc<dyn MessageHandler>);

#[derive(Default)]
pub struct Dispatcher {
    handlers: RwLock<Vec<Subscription>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a message to every subscriber. Returns how many received it.
    pub fn dispatch(&self, message: &IncomingMessage) -> usize {
        let handlers: Vec<Arc<dyn MessageHandler>> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();

        debug!(
            message_id = ?message.id,
            channel_id = ?message.channel_id,
            subscribers = handlers.len(),
            "Dispatching message"
        );

        for handler in &handlers {
            handler.on_message(message);
        }
        handlers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl EventSource for Dispatcher {
    fn subscribe(&self, handler: Arc<dyn MessageHandler>) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, handler));
        debug!(subscription_id = %id, "Handler subscribed");
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        let removed = handlers.len() != before;
        if removed {
            debug!(subscription_id = %id, "Handler unsubscribed");
        }
        removed
    }
}
