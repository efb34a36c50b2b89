//! The concurrent in-memory entity store.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::entity::Entity;
use crate::error::{RepositoryError, RepositoryResult};
use crate::id_generator::IdGenerator;

/// A thread-safe in-memory repository.
///
/// Maps identifiers of type `S` to values of type `T`. Both must have
/// well-behaved value equality; `S` must also hash consistently with it.
///
/// Every mutation goes through a single atomic primitive of the backing
/// concurrent map (insert-if-absent, replace-if-present,
/// compare-and-swap, remove), so operations on the same key are
/// linearizable while unrelated keys never contend on a shared lock.
/// Readers get independent snapshots; mutating a returned value never
/// affects the stored one.
///
/// The store exclusively owns its map and its injected id generator;
/// scope one instance to the owning service or test fixture.
pub struct InMemoryRepository<S, T> {
    entities: DashMap<S, T>,
    id_generator: Box<dyn IdGenerator<S>>,
}

impl<S, T> InMemoryRepository<S, T>
where
    S: Clone + Eq + Hash + Debug,
    T: Clone + PartialEq,
{
    pub fn new(id_generator: impl IdGenerator<S> + 'static) -> Self {
        Self {
            entities: DashMap::new(),
            id_generator: Box::new(id_generator),
        }
    }

    /// Returns a snapshot of the entity stored under `id`, if any.
    pub fn find(&self, id: &S) -> Option<Entity<S, T>> {
        self.entities
            .get(id)
            .map(|value| Entity::new(id.clone(), value.clone()))
    }

    /// Returns a point-in-time copy of all entities.
    ///
    /// The result is detached from the store: mutations racing with this
    /// call may or may not be visible, but the returned set never changes
    /// afterwards and iteration never observes partial writes.
    pub fn get_all(&self) -> HashSet<Entity<S, T>> {
        self.entities
            .iter()
            .map(|entry| Entity::new(entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Adds a value under a freshly generated identifier.
    ///
    /// A collision with an existing key means the generator broke its
    /// uniqueness contract; that is surfaced as
    /// [`RepositoryError::IdGenerationConflict`] and logged, never
    /// conflated with a caller-supplied duplicate.
    pub fn add(&self, value: T) -> RepositoryResult<Entity<S, T>, S> {
        let id = self.id_generator.generate_id();
        match self.entities.entry(id.clone()) {
            Entry::Occupied(_) => {
                tracing::error!(
                    id = ?id,
                    "id generator produced an identifier that is already in use"
                );
                Err(RepositoryError::IdGenerationConflict { id })
            }
            Entry::Vacant(slot) => {
                slot.insert(value.clone());
                Ok(Entity::new(id, value))
            }
        }
    }

    /// Adds a value under a caller-supplied identifier.
    ///
    /// Fails with [`RepositoryError::DuplicateId`] if the id is taken.
    pub fn insert(&self, id: S, value: T) -> RepositoryResult<Entity<S, T>, S> {
        match self.entities.entry(id.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::DuplicateId { id }),
            Entry::Vacant(slot) => {
                slot.insert(value.clone());
                Ok(Entity::new(id, value))
            }
        }
    }

    /// Replaces the stored value for `entity.id()` with `entity.value()`,
    /// only if an entry already exists for that id.
    ///
    /// Returns `false` if no entry exists (stale id or a concurrent
    /// delete won the race). No caller ever observes the key present
    /// with neither the old nor the new value.
    pub fn replace(&self, entity: &Entity<S, T>) -> bool {
        match self.entities.get_mut(entity.id()) {
            Some(mut current) => {
                *current = entity.value().clone();
                true
            }
            None => false,
        }
    }

    /// Compare-and-swap: replaces the value for `id` with `new_value`
    /// only if the current value equals `expected` by value equality.
    ///
    /// Returns `false` if the key is absent or the current value
    /// differs. Under contention exactly one of two racing calls with
    /// the same expected value succeeds; this is the primitive for
    /// optimistic read-modify-write cycles.
    pub fn compare_and_replace(&self, id: &S, expected: &T, new_value: T) -> bool {
        match self.entities.get_mut(id) {
            Some(mut current) if *current == *expected => {
                *current = new_value;
                true
            }
            _ => false,
        }
    }

    /// Deletes the entry for `id`, if one exists.
    ///
    /// Returns whether a removal occurred; deleting an absent id is not
    /// an error.
    pub fn delete(&self, id: &S) -> bool {
        self.entities.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
