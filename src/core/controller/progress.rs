//! Per-run progress signal

use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// Monotonically increasing count of completed dispatch operations
///
/// Best-effort signal for progress indication; not required to be exact
/// under concurrency beyond monotonicity.
#[derive(Debug)]
pub struct Progress {
    completed: AtomicUsize,
    total: usize,
}

impl Progress {
    /// Create a counter for a run of `total` operations
    pub fn new(total: usize) -> Self {
        Self {
            completed: AtomicUsize::new(0),
            total,
        }
    }

    /// Mark one operation complete, returning the new count
    pub fn complete(&self) -> usize {
        let done = self.completed.fetch_add(1, Ordering::Relaxed) + 1;
        info!("translation progress: {}/{}", done, self.total);
        done
    }

    /// Operations completed so far
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    /// Total operations submitted this run
    pub fn total(&self) -> usize {
        self.total
    }
}
