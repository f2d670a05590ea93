use std::sync::Arc;

use plan_schema::SchemaValidator;
use plan_store::{InMemoryPlanStore, PlanStore};

/// Shared, per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PlanStore>,
    pub validator: Arc<SchemaValidator>,
}

impl AppState {
    pub fn new(store: Arc<dyn PlanStore>, validator: Arc<SchemaValidator>) -> Self {
        Self { store, validator }
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory(validator: SchemaValidator) -> Self {
        Self::new(Arc::new(InMemoryPlanStore::new()), Arc::new(validator))
    }
}
