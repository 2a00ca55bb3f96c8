//! API Handlers
//!
//! HTTP request handlers for each proxy endpoint. Handlers are pure
//! plumbing: they map configured resource names to sheet sources and pass
//! fetch results through unchanged. Filtering, sorting and field shaping
//! belong to downstream consumers.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::config::Config;
use crate::error::{ProxyError, Result};
use crate::fetch::{resolve_doc_id, shared_cache, DocsClient, SharedCache, SheetsClient};
use crate::models::{
    DocumentQuery, DocumentResponse, FetchParams, HealthResponse, PurgeResponse, StatsResponse,
    TableResponse,
};

/// Application state shared across all handlers.
///
/// The composition root: owns the one cache instance per process and
/// hands references to both fetchers, which share one HTTP client
/// carrying the configured request timeout.
#[derive(Clone)]
pub struct AppState {
    /// Shared TTL cache
    pub cache: SharedCache,
    /// Tabular fetcher
    pub sheets: SheetsClient,
    /// Document fetcher
    pub docs: DocsClient,
    /// Proxy configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState from configuration.
    ///
    /// Builds the HTTP client (timeout bounded, redirects followed) and
    /// wires both fetchers to the same cache instance.
    pub fn from_config(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout))
            .build()
            .map_err(|e| ProxyError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        let cache = shared_cache(config.default_ttl);
        let sheets = SheetsClient::new(http.clone(), cache.clone(), config.sheets_base_url.clone());
        let docs = DocsClient::new(http, cache.clone(), config.docs_base_url.clone());

        Ok(Self {
            cache,
            sheets,
            docs,
            config: Arc::new(config),
        })
    }
}

/// Handler for GET /resources/:name
///
/// Looks up the named sheet source in the configuration and returns its
/// rows. Unknown names are 404; an unconfigured or unreachable sheet
/// yields an empty row set, not an error.
pub async fn resource_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<FetchParams>,
) -> Result<Json<TableResponse>> {
    let source = state
        .config
        .sheets
        .get(&name)
        .ok_or_else(|| ProxyError::UnknownResource(name.clone()))?;

    let rows = state
        .sheets
        .fetch_table(&source.sheet_id, source.tab.as_deref(), params.refresh)
        .await;

    Ok(Json(TableResponse::new(name, rows)))
}

/// Handler for GET /document
///
/// Resolves the referenced document and returns its sanitized HTML.
/// Absence (unresolvable reference or unreachable upstream) is a normal
/// outcome, serialized as nulls with a 200 status.
pub async fn document_handler(
    State(state): State<AppState>,
    Query(query): Query<DocumentQuery>,
) -> Json<DocumentResponse> {
    let doc_id = resolve_doc_id(&query.url);
    let html = state.docs.fetch_document(&query.url, query.refresh).await;

    Json(DocumentResponse::new(doc_id, html))
}

/// Handler for GET /cache/stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Read lock is enough; stats reporting never mutates
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(&stats))
}

/// Handler for DELETE /cache
///
/// Drops all cached entries immediately, regardless of expiry.
pub async fn purge_handler(State(state): State<AppState>) -> Json<PurgeResponse> {
    let mut cache = state.cache.write().await;
    let dropped = cache.len();
    cache.clear();

    Json(PurgeResponse::new(dropped))
}

/// Handler for GET /health
///
/// Returns health status of the proxy.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
