use std::sync::Arc;

use shoplist_storage::ListStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ListStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }
}
