use std::sync::Arc;

use infra::db::Db;
use infra::store::{BlogStore, PgStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BlogStore>,
}

impl AppState {
    pub fn new(db: Db) -> Self {
        Self {
            store: Arc::new(PgStore::new(db)),
        }
    }

    /// Build state over an arbitrary store implementation. Tests use this
    /// with `MemoryStore`.
    pub fn with_store(store: Arc<dyn BlogStore>) -> Self {
        Self { store }
    }
}
