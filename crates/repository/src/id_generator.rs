//! Pluggable identifier generation.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Produces identifiers unique across the lifetime of one store instance.
///
/// Implementations must be safe to call concurrently from multiple
/// threads without external locking. Any monotonic counter or random
/// UUID source satisfying that contract is interchangeable.
pub trait IdGenerator<S>: Send + Sync {
    fn generate_id(&self) -> S;
}

impl<S, G> IdGenerator<S> for Arc<G>
where
    G: IdGenerator<S> + ?Sized,
{
    fn generate_id(&self) -> S {
        (**self).generate_id()
    }
}

/// Monotonic counter generator. Ids start at 1 and are never reused,
/// including after deletions; the counter is never reset.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    next: AtomicU64,
}

impl SequenceIdGenerator {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequenceIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator<u64> for SequenceIdGenerator {
    fn generate_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// UUIDv7 (time-ordered) generator.
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator<Uuid> for UuidIdGenerator {
    fn generate_id(&self) -> Uuid {
        Uuid::now_v7()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn sequence_generator_starts_at_one_and_increments() {
        let generator = SequenceIdGenerator::new();
        assert_eq!(generator.generate_id(), 1);
        assert_eq!(generator.generate_id(), 2);
        assert_eq!(generator.generate_id(), 3);
    }

    #[test]
    fn sequence_generator_yields_distinct_ids_across_threads() {
        let generator = Arc::new(SequenceIdGenerator::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let generator = Arc::clone(&generator);
                thread::spawn(move || (0..250).map(|_| generator.generate_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "id {id} generated twice");
            }
        }
        assert_eq!(seen.len(), 8 * 250);
    }

    #[test]
    fn uuid_generator_yields_distinct_ids() {
        let generator = UuidIdGenerator::new();
        let a = generator.generate_id();
        let b = generator.generate_id();
        assert_ne!(a, b);
    }
}
