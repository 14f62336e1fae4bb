//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// conflicts, missing records). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No record exists for the given key or name.
    #[error("not found")]
    NotFound,

    /// A create collided with an existing record.
    #[error("record '{0}' already exists")]
    AlreadyExists(String),

    /// An item failed validation (price/quantity/name constraints).
    #[error("invalid item: {0}")]
    InvalidItem(String),

    /// A caller-supplied argument was malformed (e.g. empty name filter).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A combined lookup resolved the id but the name filter did not match.
    #[error("name does not match")]
    NameMismatch,

    /// An internal failure (e.g. a poisoned lock). Never expected in practice.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists(id.into())
    }

    pub fn invalid_item(msg: impl Into<String>) -> Self {
        Self::InvalidItem(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
