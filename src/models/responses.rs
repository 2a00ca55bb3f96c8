//! Response DTOs for the proxy API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::fetch::TableRow;

/// Response body for a tabular resource (GET /resources/:name)
#[derive(Debug, Clone, Serialize)]
pub struct TableResponse {
    /// The configured resource name
    pub resource: String,
    /// Number of rows returned
    pub count: usize,
    /// Parsed rows, header order preserved
    pub rows: Vec<TableRow>,
}

impl TableResponse {
    /// Creates a new TableResponse
    pub fn new(resource: impl Into<String>, rows: Vec<TableRow>) -> Self {
        Self {
            resource: resource.into(),
            count: rows.len(),
            rows,
        }
    }
}

/// Response body for a document fetch (GET /document)
///
/// Absent content is a normal outcome (unresolvable reference or
/// unreachable upstream), serialized as nulls rather than an error.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResponse {
    /// Resolved document identifier, if any
    pub doc_id: Option<String>,
    /// Sanitized HTML fragment, if any
    pub html: Option<String>,
}

impl DocumentResponse {
    /// Creates a new DocumentResponse
    pub fn new(doc_id: Option<String>, html: Option<String>) -> Self {
        Self { doc_id, html }
    }

    /// Creates an empty DocumentResponse for an unresolvable reference
    pub fn absent() -> Self {
        Self {
            doc_id: None,
            html: None,
        }
    }
}

/// Response body for the stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the cache purge endpoint (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct PurgeResponse {
    /// Confirmation message
    pub message: String,
    /// Number of entries dropped
    pub dropped: usize,
}

impl PurgeResponse {
    /// Creates a new PurgeResponse
    pub fn new(dropped: usize) -> Self {
        Self {
            message: "Cache cleared".to_string(),
            dropped,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
