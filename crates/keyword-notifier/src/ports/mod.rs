//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the notifier interacts with its
//! collaborators: where messages come from, where settings live, and how
//! alerts are presented.
//!
//! Implementations live in `application/`, `adapters/` and the integration
//! and CLI crates.

pub mod event_source;
pub mod notifier;
pub mod settings_store;

// Re-exports
pub use event_source::*;
pub use notifier::*;
pub use settings_store::*;
