//! Per-configuration AI service settings and the concurrency limit derived from them.
//!
//! Both settings fields are tri-state: a missing field means "not specified",
//! which is different from an explicit `false` or `0`. The limit policy relies
//! on that distinction, so the fields stay `Option` all the way through.

use serde::Deserialize;
use std::fmt;
use std::num::NonZeroUsize;

/// Settings attached to one AI service configuration.
///
/// Produced by the settings resolver in `aigate-config`; unknown fields in the
/// raw blob are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct AiServiceSettings {
    /// Explicit concurrency switch. `Some(false)` serializes calls,
    /// `Some(true)` lifts any limit.
    #[serde(default)]
    pub concurrency_enabled: Option<bool>,
    /// Upper bound on in-flight calls. Non-positive values mean unbounded.
    #[serde(default)]
    pub max_concurrency: Option<i64>,
}

impl AiServiceSettings {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.concurrency_enabled.is_none() && self.max_concurrency.is_none()
    }

    /// Resolve the concurrency limit for these settings.
    ///
    /// The explicit switch always wins over `max_concurrency`:
    ///
    /// | `concurrency_enabled` | `max_concurrency` | limit |
    /// |-----------------------|-------------------|-------|
    /// | `Some(false)`         | any               | 1     |
    /// | `Some(true)`          | any               | unbounded |
    /// | `None`                | `Some(m)`, m > 0  | m     |
    /// | `None`                | `Some(m)`, m <= 0 | unbounded |
    /// | `None`                | `None`            | unbounded |
    #[must_use]
    pub fn concurrency_limit(&self) -> ConcurrencyLimit {
        match (self.concurrency_enabled, self.max_concurrency) {
            (Some(false), _) => ConcurrencyLimit::SERIAL,
            (Some(true), _) | (None, None) => ConcurrencyLimit::UNBOUNDED,
            (None, Some(max)) if max <= 0 => ConcurrencyLimit::UNBOUNDED,
            (None, Some(max)) => {
                let max = usize::try_from(max).unwrap_or(usize::MAX);
                ConcurrencyLimit::new(max)
            }
        }
    }
}

/// Maximum number of concurrent calls. Zero means no gate at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConcurrencyLimit(usize);

impl ConcurrencyLimit {
    pub const UNBOUNDED: Self = Self(0);
    pub const SERIAL: Self = Self(1);

    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self(limit)
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    #[must_use]
    pub const fn is_unbounded(self) -> bool {
        self.0 == 0
    }

    /// Gate capacity, or `None` when no gate should exist.
    #[must_use]
    pub const fn capacity(self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.0)
    }
}

impl From<NonZeroUsize> for ConcurrencyLimit {
    fn from(capacity: NonZeroUsize) -> Self {
        Self(capacity.get())
    }
}

impl fmt::Display for ConcurrencyLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            f.write_str("unbounded")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
