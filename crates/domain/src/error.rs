//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Generator settings are unusable.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
