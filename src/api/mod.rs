//! API Module
//!
//! HTTP handlers and routing for the proxy's REST surface.
//!
//! # Endpoints
//! - `GET /resources/:name` - Rows of a configured sheet resource
//! - `GET /document` - Sanitized HTML of a referenced document
//! - `GET /cache/stats` - Cache statistics
//! - `DELETE /cache` - Drop all cached entries
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
