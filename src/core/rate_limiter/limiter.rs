//! Core rate limiter implementation

use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Admission control for one translation run
///
/// Created fresh per run; shared by all in-flight dispatch operations for
/// that run. Admission and release go through a semaphore, so concurrent
/// callers can never over-admit.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    /// Concurrency permits; `None` means unbounded
    permits: Option<Arc<Semaphore>>,
    /// Wave size; `None` means a single wave
    wave_size: Option<usize>,
}

impl RateLimiter {
    /// Create a rate limiter from the configured caps
    ///
    /// A non-positive `concurrency_limit` disables the concurrency cap; a
    /// non-positive `wave_size` dispatches everything in one wave.
    pub fn new(concurrency_limit: i64, wave_size: i64) -> Self {
        let permits = usize::try_from(concurrency_limit)
            .ok()
            .filter(|&n| n > 0)
            .map(|n| Arc::new(Semaphore::new(n)));
        let wave_size = usize::try_from(wave_size).ok().filter(|&q| q > 0);

        Self { permits, wave_size }
    }

    /// Wait until a concurrency slot is available
    ///
    /// Returns a permit that releases the slot when dropped, or `None`
    /// immediately when concurrency is unbounded.
    pub async fn admit(&self) -> Option<OwnedSemaphorePermit> {
        match &self.permits {
            // acquire_owned only fails if the semaphore is closed, which
            // never happens here; treat it as unbounded rather than panic
            Some(sem) => sem.clone().acquire_owned().await.ok(),
            None => None,
        }
    }

    /// Whether the concurrency cap is active
    pub fn is_bounded(&self) -> bool {
        self.permits.is_some()
    }

    /// Number of slots currently available, if bounded
    pub fn available_permits(&self) -> Option<usize> {
        self.permits.as_ref().map(|sem| sem.available_permits())
    }

    /// Partition an ordered slice into dispatch waves
    ///
    /// Consecutive chunks of the configured wave size; the last wave may be
    /// smaller. A single wave covering everything when no wave size is set.
    pub fn waves<'a, T>(&self, items: &'a [T]) -> impl Iterator<Item = &'a [T]> {
        let size = self.wave_size.unwrap_or(items.len()).max(1);
        items.chunks(size)
    }

    /// Number of waves a given item count produces
    pub fn wave_count(&self, total: usize) -> usize {
        if total == 0 {
            return 0;
        }
        match self.wave_size {
            Some(q) => total.div_ceil(q),
            None => 1,
        }
    }
}
