//! Hit counter for the static file route

use std::sync::atomic::{AtomicU64, Ordering};

/// Counts the requests that went through the static file route.
///
/// Starts at zero, only ever goes up by one per hit, and goes back to zero
/// on [`HitCounter::reset`]. It is shared between all request tasks through
/// an `Arc` in the router state.
#[derive(Debug, Default)]
pub struct HitCounter {
    hits: AtomicU64,
}

impl HitCounter {
    pub const fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
        }
    }

    /// Record one hit.
    pub fn increment(&self) {
        let _ = self.hits.fetch_add(1, Ordering::SeqCst);
    }

    /// Current number of hits.
    pub fn read(&self) -> u64 {
        self.hits.load(Ordering::SeqCst)
    }

    /// Set the number of hits back to zero.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::SeqCst);
    }
}
