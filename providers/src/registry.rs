//! Limiters keyed by configuration identity.
//!
//! The registry hands out one shared [`ConcurrencyLimiter`] per configuration so
//! every client built for that configuration competes for the same slots. When
//! a configuration's limit changes, a fresh limiter replaces the old one in the
//! map. Holders of the old limiter keep using it until they drop it; nothing is
//! resized in place.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use aigate_types::{ConcurrencyLimit, ConfigId};

use crate::limiter::ConcurrencyLimiter;

/// Process-local map from configuration identity to its current limiter.
///
/// Construct one per service and pass it where it is needed; separate
/// registries never share limiters.
#[derive(Debug, Default)]
pub struct LimiterRegistry {
    by_config: Mutex<HashMap<ConfigId, Arc<ConcurrencyLimiter>>>,
}

impl LimiterRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the limiter for `config_id` at `limit`, creating or replacing it
    /// as needed.
    ///
    /// - Unbounded limits return `None` without touching the map.
    /// - An existing entry with the same capacity is reused, along with its
    ///   current holders and waiters.
    /// - A missing entry, or one with a different capacity, is replaced by a new
    ///   limiter.
    pub fn get_or_create(
        &self,
        config_id: ConfigId,
        limit: ConcurrencyLimit,
    ) -> Option<Arc<ConcurrencyLimiter>> {
        let capacity = limit.capacity()?;

        let mut by_config = self.lock();
        let previous = match by_config.get(&config_id) {
            Some(existing) if existing.capacity() == capacity => {
                return Some(Arc::clone(existing));
            }
            Some(existing) => Some(existing.capacity()),
            None => None,
        };

        let limiter = Arc::new(ConcurrencyLimiter::new(capacity));
        by_config.insert(config_id, Arc::clone(&limiter));
        drop(by_config);

        if let Some(previous) = previous {
            tracing::debug!(
                %config_id,
                previous_capacity = previous.get(),
                capacity = capacity.get(),
                "Replaced AI concurrency limiter"
            );
        } else {
            tracing::debug!(
                %config_id,
                capacity = capacity.get(),
                "Created AI concurrency limiter"
            );
        }
        Some(limiter)
    }

    /// Current limiter for `config_id`, if one has been created.
    #[must_use]
    pub fn get(&self, config_id: ConfigId) -> Option<Arc<ConcurrencyLimiter>> {
        self.lock().get(&config_id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Every critical section is a single map read or write, so a panic
    // elsewhere cannot leave the map half-updated.
    fn lock(&self) -> MutexGuard<'_, HashMap<ConfigId, Arc<ConcurrencyLimiter>>> {
        self.by_config.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
