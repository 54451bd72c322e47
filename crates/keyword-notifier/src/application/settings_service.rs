//! Settings Application Service
//!
//! Owns the current settings snapshot. Loaded once at startup, persisted on
//! every edit. Readers get a clone so that edits never race an evaluation.

use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

use crate::domain::{
    entities::Settings, errors::DomainError, value_objects::SettingsField,
};
use crate::ports::SettingsStore;

pub struct SettingsService {
    store: Arc<dyn SettingsStore>,
    current: RwLock<Settings>,
}

impl SettingsService {
    /// Load settings from the store (defaults when nothing is stored)
    pub fn load(store: Arc<dyn SettingsStore>) -> Result<Self, DomainError> {
        let settings = store.load()?;
        Ok(Self {
            store,
            current: RwLock::new(settings),
        })
    }

    /// Copy of the current settings
    pub fn snapshot(&self) -> Settings {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Update one field and persist immediately.
    ///
    /// The in-memory snapshot only changes once the store accepted the write.
    pub fn set(&self, field: SettingsField, value: impl Into<String>) -> Result<Settings, DomainError> {
        let mut updated = self.snapshot();
        updated.set(field, value);
        self.replace(updated)
    }

    /// Restore the defaults and persist them
    pub fn reset(&self) -> Result<Settings, DomainError> {
        self.replace(Settings::default())
    }

    /// Replace the whole record and persist it
    pub fn replace(&self, settings: Settings) -> Result<Settings, DomainError> {
        self.store.save(&settings)?;
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = settings.clone();

        info!(
            keywords = settings.keyword_list().len(),
            servers = settings.server_filter().ids().len(),
            channels = settings.channel_filter().ids().len(),
            "Settings saved"
        );
        Ok(settings)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.snapshot().warnings()
    }
}
