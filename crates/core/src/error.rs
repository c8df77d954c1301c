//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures (validation and
/// configuration). Transport concerns belong to the web crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed catalog record).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Two records share the same identifier.
    #[error("duplicate identifier: {0}")]
    DuplicateId(String),

    /// A required configuration value is absent.
    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }

    pub fn missing_config(key: &'static str) -> Self {
        Self::MissingConfig(key)
    }
}
