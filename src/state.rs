use std::sync::Arc;

use crate::hits::HitCounter;

/// Shared state of the router.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    hits: Arc<HitCounter>,
}

impl AppState {
    pub fn new(hits: Arc<HitCounter>) -> Self {
        Self { hits }
    }

    pub fn hits(&self) -> &HitCounter {
        &self.hits
    }
}
