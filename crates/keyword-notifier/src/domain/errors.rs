//! Domain Errors
//!
//! Error types for everything around the matcher. The matcher itself never
//! fails; malformed input degrades to a non-match.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn storage<E: std::fmt::Display>(context: &str, err: E) -> Self {
        Self::Storage(format!("{}: {}", context, err))
    }
}
