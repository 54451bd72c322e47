//! Settings file storage for the CLI
//!
//! Stores the three settings fields in ~/.config/keyword-notifier/settings.toml

use keyword_notifier::{DomainError, Settings, SettingsStore};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR: &str = "keyword-notifier";
const SETTINGS_FILE: &str = "settings.toml";

/// TOML-file backed settings store
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the explicit path, or the default location
    pub fn open(path: Option<PathBuf>) -> Result<Self, DomainError> {
        match path {
            Some(path) => Ok(Self::new(path)),
            None => Ok(Self::new(Self::default_path()?)),
        }
    }

    /// Get the default settings file path
    pub fn default_path() -> Result<PathBuf, DomainError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DomainError::Storage("Could not determine config directory".into()))?;
        Ok(config_dir.join(CONFIG_DIR).join(SETTINGS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<Settings, DomainError> {
        if !self.path.exists() {
            debug!(path = ?self.path, "No settings file, using defaults");
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            DomainError::storage(&format!("Failed to read settings from {:?}", self.path), e)
        })?;

        toml::from_str(&content)
            .map_err(|e| DomainError::storage("Failed to parse settings file", e))
    }

    fn save(&self, settings: &Settings) -> Result<(), DomainError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                DomainError::storage(&format!("Failed to create config directory {:?}", dir), e)
            })?;
        }

        let content = toml::to_string_pretty(settings)
            .map_err(|e| DomainError::storage("Failed to serialize settings", e))?;

        fs::write(&self.path, content).map_err(|e| {
            DomainError::storage(&format!("Failed to write settings to {:?}", self.path), e)
        })
    }
}
