//! In-memory repository.

use std::collections::HashMap;

use taskforge_core::{Entity, EntityId, StoreError, StoreResult};

use crate::repository::Repository;

/// In-memory keyed store.
///
/// Owned mapping from identifier to entity, created empty and destroyed
/// with its scope — nothing persists across restarts. Single-threaded by
/// design: mutation goes through `&mut self`, no internal locking.
#[derive(Debug, Clone)]
pub struct MemoryRepository<T> {
    items: HashMap<EntityId, T>,
}

impl<T> MemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
        }
    }
}

impl<T: Entity + Clone> Repository<T> for MemoryRepository<T> {
    fn save(&mut self, item: T) -> StoreResult<T> {
        let id = item.id().clone();
        let replaced = self.items.insert(id.clone(), item.clone()).is_some();
        tracing::debug!(%id, replaced, "entity saved");
        Ok(item)
    }

    fn find_by_id(&self, id: &EntityId) -> StoreResult<&T> {
        self.items
            .get(id)
            .ok_or_else(|| StoreError::not_found(id.clone()))
    }

    fn delete(&mut self, id: &EntityId) -> StoreResult<bool> {
        if self.items.remove(id).is_none() {
            return Err(StoreError::not_found(id.clone()));
        }
        tracing::debug!(%id, "entity deleted");
        Ok(true)
    }

    fn find_all(&self) -> Vec<&T> {
        self.items.values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Note {
        id: EntityId,
        body: String,
    }

    impl Note {
        fn new(id: impl Into<EntityId>, body: &str) -> Self {
            Self {
                id: id.into(),
                body: body.to_owned(),
            }
        }
    }

    impl Entity for Note {
        fn id(&self) -> &EntityId {
            &self.id
        }
    }

    #[test]
    fn save_then_find_returns_equal_value() {
        let mut repo = MemoryRepository::new();
        let note = Note::new("a", "hello");

        let stored = repo.save(note.clone()).unwrap();
        assert_eq!(stored, note);
        assert_eq!(repo.find_by_id(&"a".into()).unwrap(), &note);
    }

    #[test]
    fn missing_id_fails_lookup_and_delete() {
        let mut repo = MemoryRepository::<Note>::new();
        let id = EntityId::from("ghost");

        assert_eq!(
            repo.find_by_id(&id).unwrap_err(),
            StoreError::not_found("ghost")
        );
        assert_eq!(repo.delete(&id).unwrap_err(), StoreError::not_found("ghost"));
    }

    #[test]
    fn save_is_an_upsert() {
        let mut repo = MemoryRepository::new();
        repo.save(Note::new(1, "first")).unwrap();
        repo.save(Note::new(1, "second")).unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find_by_id(&1.into()).unwrap().body, "second");
    }

    #[test]
    fn find_all_returns_each_entity_once() {
        let mut repo = MemoryRepository::new();
        for n in [1, 2, 3] {
            repo.save(Note::new(n, "x")).unwrap();
        }

        let all = repo.find_all();
        assert_eq!(all.len(), 3);
        for n in [1i64, 2, 3] {
            assert_eq!(
                all.iter().filter(|note| note.id == EntityId::from(n)).count(),
                1
            );
        }
    }

    #[test]
    fn text_and_number_ids_do_not_collide() {
        let mut repo = MemoryRepository::new();
        repo.save(Note::new("1", "text")).unwrap();
        repo.save(Note::new(1, "number")).unwrap();

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.find_by_id(&"1".into()).unwrap().body, "text");
        assert_eq!(repo.find_by_id(&1.into()).unwrap().body, "number");
    }

    #[test]
    fn full_lifecycle_from_empty() {
        let mut repo = MemoryRepository::new();
        assert!(repo.is_empty());
        assert!(repo.find_all().is_empty());

        repo.save(Note::new("a", "body")).unwrap();
        assert_eq!(repo.find_by_id(&"a".into()).unwrap().id, "a".into());

        assert_eq!(repo.delete(&"a".into()), Ok(true));
        assert_eq!(
            repo.find_by_id(&"a".into()).unwrap_err().to_string(),
            "item with id a not found"
        );
    }

    #[test]
    fn delete_then_save_restores_findability() {
        let mut repo = MemoryRepository::new();
        repo.save(Note::new("a", "v1")).unwrap();
        repo.delete(&"a".into()).unwrap();
        repo.save(Note::new("a", "v2")).unwrap();

        assert_eq!(repo.find_by_id(&"a".into()).unwrap().body, "v2");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_id() -> impl Strategy<Value = EntityId> {
            prop_oneof![
                "[a-z0-9-]{1,12}".prop_map(EntityId::from),
                any::<i64>().prop_map(EntityId::from),
            ]
        }

        proptest! {
            /// Property: whatever was saved last under an id is what lookups see.
            #[test]
            fn last_save_wins(id in arb_id(), first in ".*", second in ".*") {
                let mut repo = MemoryRepository::new();
                repo.save(Note { id: id.clone(), body: first }).unwrap();
                repo.save(Note { id: id.clone(), body: second.clone() }).unwrap();

                prop_assert_eq!(repo.len(), 1);
                prop_assert_eq!(&repo.find_by_id(&id).unwrap().body, &second);
            }

            /// Property: delete makes the id unobservable again.
            #[test]
            fn delete_is_complete(id in arb_id(), body in ".*") {
                let mut repo = MemoryRepository::new();
                repo.save(Note { id: id.clone(), body }).unwrap();
                prop_assert_eq!(repo.delete(&id), Ok(true));

                prop_assert!(repo.is_empty());
                prop_assert_eq!(
                    repo.find_by_id(&id).unwrap_err(),
                    StoreError::NotFound { id: id.clone() }
                );
            }
        }
    }
}
