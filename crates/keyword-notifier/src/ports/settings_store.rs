//! Settings Store Port
//!
//! Persistence for the flat settings record.

use crate::domain::{entities::Settings, errors::DomainError};

/// Settings persistence interface
pub trait SettingsStore: Send + Sync {
    /// Load stored settings, or the defaults when nothing is stored yet
    fn load(&self) -> Result<Settings, DomainError>;

    /// Persist settings verbatim
    fn save(&self, settings: &Settings) -> Result<(), DomainError>;
}
