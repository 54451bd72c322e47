//! In-memory settings store

use std::sync::RwLock;

use crate::domain::{entities::Settings, errors::DomainError};
use crate::ports::SettingsStore;

/// Keeps settings in memory. Useful for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    settings: RwLock<Option<Settings>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with previously stored settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(Some(settings)),
        }
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn load(&self) -> Result<Settings, DomainError> {
        let stored = self
            .settings
            .read()
            .map_err(|e| DomainError::storage("settings lock poisoned", e))?;
        Ok(stored.clone().unwrap_or_default())
    }

    fn save(&self, settings: &Settings) -> Result<(), DomainError> {
        let mut stored = self
            .settings
            .write()
            .map_err(|e| DomainError::storage("settings lock poisoned", e))?;
        *stored = Some(settings.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_when_empty() {
        let store = InMemorySettingsStore::new();
        assert_eq!(store.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = InMemorySettingsStore::new();
        let settings = Settings::new(" a , b", "1", " 2 ,");
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
    }
}
