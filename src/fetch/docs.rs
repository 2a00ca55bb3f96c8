//! Docs Fetcher Module
//!
//! Resolves a document reference to its identifier, retrieves the
//! document's HTML export and caches the sanitized fragment.

use tracing::warn;

use crate::fetch::{clean_doc_html, CachedValue, SharedCache};

/// Path segment marker preceding a document identifier in a reference URL.
const DOC_PATH_MARKER: &str = "/document/d/";

// == Docs Client ==
/// Read-through fetcher for document HTML exports.
#[derive(Clone)]
pub struct DocsClient {
    /// Upstream HTTP client (redirects followed, request timeout bounded)
    http: reqwest::Client,
    /// Shared cache, consulted under the `doc:` namespace
    cache: SharedCache,
    /// Base URL of the document export endpoint
    base_url: String,
}

impl DocsClient {
    // == Constructor ==
    /// Creates a new DocsClient.
    ///
    /// # Arguments
    /// * `http` - Pre-built HTTP client carrying the request timeout
    /// * `cache` - Shared cache instance
    /// * `base_url` - Document export base URL (no trailing slash)
    pub fn new(http: reqwest::Client, cache: SharedCache, base_url: impl Into<String>) -> Self {
        Self {
            http,
            cache,
            base_url: base_url.into(),
        }
    }

    // == HTML Export URL ==
    /// Builds the public HTML export URL for a document.
    pub fn html_export_url(&self, doc_id: &str) -> String {
        format!("{}/{}/export?format=html", self.base_url, doc_id)
    }

    // == Fetch Document ==
    /// Fetches a document reference as sanitized HTML, read-through cached.
    ///
    /// Returns `None` for an empty reference, an unresolvable reference or
    /// an unreachable upstream. Not every reference is expected to resolve,
    /// so an absent result is a normal "no content" outcome, never an error.
    ///
    /// # Arguments
    /// * `reference` - A document URL containing the `/document/d/<id>` marker
    /// * `bypass_cache` - Skip the cache lookup (the result is still stored)
    pub async fn fetch_document(&self, reference: &str, bypass_cache: bool) -> Option<String> {
        if reference.is_empty() {
            return None;
        }

        let doc_id = resolve_doc_id(reference)?;
        let key = doc_cache_key(&doc_id);

        if !bypass_cache {
            let mut cache = self.cache.write().await;
            if let Some(CachedValue::Document(html)) = cache.get(&key) {
                return Some(html);
            }
        }

        // Lock released before the network round trip
        let url = self.html_export_url(&doc_id);
        let response = match self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Could not fetch document {}: {}", doc_id, e);
                return None;
            }
        };

        let raw_html = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not read document {} response body: {}", doc_id, e);
                return None;
            }
        };

        let html = clean_doc_html(&raw_html);

        let mut cache = self.cache.write().await;
        cache.set(key, CachedValue::Document(html.clone()), None);

        Some(html)
    }
}

// == Cache Key ==
/// Deterministic cache key for a document identity.
pub fn doc_cache_key(doc_id: &str) -> String {
    format!("doc:{}", doc_id)
}

// == Reference Resolution ==
/// Extracts the document identifier from a reference URL.
///
/// Recognizes the `/document/d/<id>` embedding pattern, with the id
/// running up to the next path segment, query or fragment. Any input
/// lacking the marker, or with an empty id segment, yields `None`.
pub fn resolve_doc_id(reference: &str) -> Option<String> {
    let start = reference.find(DOC_PATH_MARKER)? + DOC_PATH_MARKER.len();
    let id = reference[start..].split(['/', '?', '#']).next()?;

    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
