//! API Routes
//!
//! Configures the Axum router with all proxy endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    document_handler, health_handler, purge_handler, resource_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /resources/:name` - Rows of a configured sheet resource
/// - `GET /document` - Sanitized HTML of a referenced document
/// - `GET /cache/stats` - Cache statistics
/// - `DELETE /cache` - Drop all cached entries
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/resources/:name", get(resource_handler))
        .route("/document", get(document_handler))
        .route("/cache/stats", get(stats_handler))
        .route("/cache", delete(purge_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
