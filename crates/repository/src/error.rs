//! Repository error model.

use thiserror::Error;

/// Result type used across the repository layer.
pub type RepositoryResult<T, S> = Result<T, RepositoryError<S>>;

/// Insertion failures, split by root cause.
///
/// The two variants are deliberately distinct: a duplicate id supplied by
/// the caller is a client error the adapter can report, while a collision
/// on a freshly generated id means the identifier generator broke its
/// uniqueness contract and the process state can no longer be trusted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError<S: std::fmt::Debug> {
    /// Caller-supplied identifier already present in the store.
    #[error("an entity already exists with the supplied id {id:?}")]
    DuplicateId { id: S },

    /// Freshly generated identifier already present in the store.
    #[error("an entity already exists with the newly generated id {id:?}")]
    IdGenerationConflict { id: S },
}
