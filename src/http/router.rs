//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production.
    // Exposed headers make the alert and pagination headers readable from browsers.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers(Any);

    // Build the API router with the produto endpoints
    let api = Router::new()
        .route(
            "/produtos",
            get(handlers::get_all_produtos)
                .post(handlers::create_produto)
                .put(handlers::update_produto),
        )
        .route(
            "/produtos/{id}",
            get(handlers::get_produto).delete(handlers::delete_produto),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::RepositoryFactory;
    use crate::services::ProductService;

    #[test]
    fn test_router_creation() {
        let service = ProductService::with_default_mapper(RepositoryFactory::create_local());
        let state = AppState::new(service);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
