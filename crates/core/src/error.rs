//! Store error model.

use thiserror::Error;

use crate::id::EntityId;

/// Result type used across the storage layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-level error.
///
/// Exactly one recoverable failure kind is modeled: a lookup miss. Store
/// operations are synchronous and in-memory, so nothing here is transient.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No entity is stored under the requested identifier.
    #[error("item with id {id} not found")]
    NotFound { id: EntityId },
}

impl StoreError {
    pub fn not_found(id: impl Into<EntityId>) -> Self {
        Self::NotFound { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_id() {
        assert_eq!(
            StoreError::not_found("a").to_string(),
            "item with id a not found"
        );
        assert_eq!(
            StoreError::not_found(3).to_string(),
            "item with id 3 not found"
        );
    }
}
