//! Entity trait: identity + continuity across state changes.

use crate::id::EntityId;

/// Entity marker + minimal interface.
///
/// An entity is a record identified by a unique key and stored/retrieved as a
/// whole. Stores treat the record as an opaque value keyed by `id()`; any
/// timestamps the record carries are the caller's business, not the store's.
pub trait Entity {
    /// Returns the entity identifier.
    fn id(&self) -> &EntityId;
}
