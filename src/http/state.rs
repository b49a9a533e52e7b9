//! Application state for the HTTP server.

use crate::services::ProductService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Product service handling all business operations
    pub service: ProductService,
}

impl AppState {
    /// Create a new application state around the given service.
    pub fn new(service: ProductService) -> Self {
        Self { service }
    }
}
