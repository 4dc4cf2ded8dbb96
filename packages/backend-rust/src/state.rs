use std::sync::Arc;
use std::time::Instant;

use crate::catalog::Catalog;
use crate::store::ProgressStore;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    catalog: Catalog,
    store: Arc<dyn ProgressStore>,
}

impl AppState {
    pub fn new(catalog: Catalog, store: Arc<dyn ProgressStore>) -> Self {
        Self {
            started_at: Instant::now(),
            catalog,
            store,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &dyn ProgressStore {
        self.store.as_ref()
    }
}
