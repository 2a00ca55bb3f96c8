//! Error types for the caching proxy
//!
//! Provides unified error handling using thiserror. The taxonomy is
//! deliberately narrow: upstream unavailability is steady-state behavior
//! handled inside the fetchers (empty/absent results), never an error
//! variant here. Errors are reserved for unknown resource names and
//! malformed startup configuration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Proxy Error Enum ==
/// Unified error type for the caching proxy.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Resource name not present in the configured sheet map
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// Malformed configuration at startup
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ProxyError::UnknownResource(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ProxyError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            ProxyError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the caching proxy.
pub type Result<T> = std::result::Result<T, ProxyError>;
