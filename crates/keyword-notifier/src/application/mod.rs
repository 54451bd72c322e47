//! Application Layer
//!
//! Orchestrates the matcher with its collaborators.

mod dispatcher;
mod settings_service;
mod watcher;

pub use dispatcher::*;
pub use settings_service::*;
pub use watcher::*;
