//! Fixed-capacity admission gate.

use std::num::NonZeroUsize;

use tokio::sync::{Semaphore, SemaphorePermit};

/// Counting gate admitting at most `capacity` holders at once.
///
/// Capacity is fixed for the life of the limiter. A different capacity means a
/// different limiter; see [`crate::LimiterRegistry`].
#[derive(Debug)]
pub struct ConcurrencyLimiter {
    capacity: NonZeroUsize,
    permits: usize,
    semaphore: Semaphore,
}

/// Proof of admission. The slot is released when this is dropped.
#[derive(Debug)]
#[must_use = "the slot is released as soon as the permit is dropped"]
pub struct LimiterPermit<'a> {
    _permit: SemaphorePermit<'a>,
}

impl ConcurrencyLimiter {
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        // Semaphore panics above MAX_PERMITS; anything that large is unbounded in practice.
        let permits = capacity.get().min(Semaphore::MAX_PERMITS);
        Self {
            capacity,
            permits,
            semaphore: Semaphore::new(permits),
        }
    }

    /// Capacity this limiter was built with.
    #[must_use]
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Slots currently free.
    #[must_use]
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Callers currently admitted.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.permits - self.available()
    }

    /// Wait for a free slot.
    ///
    /// There is no deadline: if every holder keeps its permit forever, this
    /// never resolves. Dropping the returned future before it resolves gives
    /// up the place in line without consuming a slot.
    pub async fn acquire(&self) -> LimiterPermit<'_> {
        if self.available() == 0 {
            tracing::trace!(
                capacity = self.capacity.get(),
                "Concurrency limit reached, waiting for a slot"
            );
        }

        let permit = self
            .semaphore
            .acquire()
            .await
            .expect("limiter semaphore is never closed");
        LimiterPermit { _permit: permit }
    }
}
