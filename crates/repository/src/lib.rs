//! `foodlab-repository` — generic, thread-safe in-memory entity store.
//!
//! The store maps generated (or caller-supplied) identifiers to immutable
//! value snapshots and performs all mutations through per-key atomic
//! primitives, so concurrent callers never need external locking.

pub mod entity;
pub mod error;
pub mod id_generator;
pub mod store;

pub use entity::Entity;
pub use error::{RepositoryError, RepositoryResult};
pub use id_generator::{IdGenerator, SequenceIdGenerator, UuidIdGenerator};
pub use store::InMemoryRepository;
