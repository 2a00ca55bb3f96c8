//! Request DTOs for the proxy API
//!
//! Defines the structure of incoming query parameters. The proxy is
//! read-only, so there are no request bodies.

use serde::Deserialize;

/// Query parameters for resource fetches (GET /resources/:name)
///
/// # Fields
/// - `refresh`: bypass the cache lookup; the fresh result is still cached
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FetchParams {
    /// Bypass the cache for this request
    #[serde(default)]
    pub refresh: bool,
}

/// Query parameters for document fetches (GET /document)
///
/// # Fields
/// - `url`: the document reference to resolve and fetch
/// - `refresh`: bypass the cache lookup
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentQuery {
    /// Document reference URL
    pub url: String,
    /// Bypass the cache for this request
    #[serde(default)]
    pub refresh: bool,
}
