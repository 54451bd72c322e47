//! Domain Entities
//!
//! - Settings: the flat, user-edited configuration record
//! - IncomingMessage: one chat message delivered by an event source
//! - KeywordAlert: what a notifier is told after a match

mod alert;
mod message;
mod settings;

pub use alert::*;
pub use message::*;
pub use settings::*;
