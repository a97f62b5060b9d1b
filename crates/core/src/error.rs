//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic inventory failures (missing ids,
/// duplicate ids, empty updates). Transport concerns belong in the API crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No item is stored under the given id.
    #[error("item with item_id={0} does not exist")]
    NotFound(ItemId),

    /// An item is already stored under the given id.
    #[error("item with id={0} already exists")]
    Conflict(ItemId),

    /// The request was well-formed but carried nothing usable.
    #[error("{0}")]
    Validation(String),

    /// The backing store can no longer be read or written.
    #[error("inventory store unavailable")]
    Unavailable,
}

impl DomainError {
    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound(id)
    }

    pub fn conflict(id: ItemId) -> Self {
        Self::Conflict(id)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
