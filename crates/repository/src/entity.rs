//! Entity snapshot: an identifier paired with the value it had at read time.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// An immutable `(id, value)` snapshot handed out by the store.
///
/// Equality and hashing are defined over the identifier alone: two
/// entities are the same record iff their ids match, regardless of
/// payload. A replace produces a new `Entity`, never an in-place update.
///
/// Serializes with the value's fields inlined next to `id`, so a
/// `Human { name }` entity renders as `{"id": 1, "name": "Ann", ...}`
/// rather than nesting the payload under a `value` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity<S, T> {
    id: S,
    #[serde(flatten)]
    value: T,
}

impl<S, T> Entity<S, T> {
    pub fn new(id: S, value: T) -> Self {
        Self { id, value }
    }

    pub fn id(&self) -> &S {
        &self.id
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<S: PartialEq, T> PartialEq for Entity<S, T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<S: Eq, T> Eq for Entity<S, T> {}

impl<S: Hash, T> Hash for Entity<S, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
