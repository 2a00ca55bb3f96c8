//! Request and Response models for the proxy API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP query parameters and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{DocumentQuery, FetchParams};
pub use responses::{
    DocumentResponse, ErrorResponse, HealthResponse, PurgeResponse, StatsResponse, TableResponse,
};
