//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// precondition violations). Infrastructure concerns belong elsewhere, and
/// none of these are retried: every operation is local and deterministic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A record failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced identifier does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// An identifier collided on creation. Creation never overwrites.
    #[error("duplicate id: {0}")]
    DuplicateId(String),

    /// A borrow was attempted on a book that is not on the shelf.
    #[error("book unavailable: {0}")]
    BookUnavailable(String),

    /// A borrow was attempted for a suspended reader.
    #[error("reader suspended: {0}")]
    ReaderSuspended(String),

    /// An operation targeted an entity already in a terminal or incompatible
    /// state (e.g. returning a loan that was already returned).
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn duplicate_id(msg: impl Into<String>) -> Self {
        Self::DuplicateId(msg.into())
    }

    pub fn book_unavailable(msg: impl Into<String>) -> Self {
        Self::BookUnavailable(msg.into())
    }

    pub fn reader_suspended(msg: impl Into<String>) -> Self {
        Self::ReaderSuspended(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}
