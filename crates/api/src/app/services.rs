//! Service wiring shared by all route handlers.

use foodlab_humans::Human;
use foodlab_repository::{InMemoryRepository, SequenceIdGenerator};

/// Application services handed to handlers via `Extension<Arc<AppServices>>`.
///
/// Owns the humans repository; its lifetime is the lifetime of the
/// router built around it (one per process, or one per test server).
pub struct AppServices {
    humans: InMemoryRepository<u64, Human>,
}

impl AppServices {
    pub fn humans(&self) -> &InMemoryRepository<u64, Human> {
        &self.humans
    }
}

pub fn build_services() -> AppServices {
    AppServices {
        humans: InMemoryRepository::new(SequenceIdGenerator::new()),
    }
}
