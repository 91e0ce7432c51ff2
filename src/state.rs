//! Shared state handed to every HTTP handler.

use std::sync::Arc;

use crate::application::services::LinkOperations;

/// Application state injected into handlers.
///
/// Built once at startup. Handlers only see the [`LinkOperations`] boundary,
/// never the concrete store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<dyn LinkOperations>,
}

impl AppState {
    pub fn new(link_service: Arc<dyn LinkOperations>) -> Self {
        Self { link_service }
    }
}
