//! Repository abstraction.

use taskforge_core::{Entity, EntityId, StoreResult};

/// Keyed persistence for entities of a single type.
///
/// All operations are synchronous and report expected failures through
/// [`StoreResult`] rather than panicking; the only modeled failure is a
/// lookup miss. Implementations are not expected to be thread-safe —
/// callers that share a repository across threads must synchronize
/// externally.
pub trait Repository<T: Entity + Clone> {
    /// Insert or overwrite the entity at its identifier.
    ///
    /// An upsert: any prior value under the same id is replaced silently.
    /// Always succeeds, returning the stored item.
    fn save(&mut self, item: T) -> StoreResult<T>;

    /// Look up an entity by identifier.
    fn find_by_id(&self, id: &EntityId) -> StoreResult<&T>;

    /// Remove the entry if present.
    ///
    /// Does not distinguish "already deleted" from "never existed": both
    /// report not-found.
    fn delete(&mut self, id: &EntityId) -> StoreResult<bool>;

    /// Every stored entity. Iteration order is unspecified.
    fn find_all(&self) -> Vec<&T>;
}
