//! Sheets Fetcher Module
//!
//! Retrieves a public spreadsheet's CSV export, parses it into ordered
//! name-keyed rows and caches the parsed result per (sheet, tab).

use tracing::warn;

use crate::fetch::{CachedValue, SharedCache, TableRow};

// == Sheets Client ==
/// Read-through fetcher for spreadsheet CSV exports.
#[derive(Clone)]
pub struct SheetsClient {
    /// Upstream HTTP client (redirects followed, request timeout bounded)
    http: reqwest::Client,
    /// Shared cache, consulted under the `sheet:` namespace
    cache: SharedCache,
    /// Base URL of the spreadsheet export endpoint
    base_url: String,
}

impl SheetsClient {
    // == Constructor ==
    /// Creates a new SheetsClient.
    ///
    /// # Arguments
    /// * `http` - Pre-built HTTP client carrying the request timeout
    /// * `cache` - Shared cache instance
    /// * `base_url` - Spreadsheet export base URL (no trailing slash)
    pub fn new(http: reqwest::Client, cache: SharedCache, base_url: impl Into<String>) -> Self {
        Self {
            http,
            cache,
            base_url: base_url.into(),
        }
    }

    // == CSV Export URL ==
    /// Builds the public CSV export URL for a sheet, optionally scoped to
    /// a named tab.
    pub fn csv_export_url(&self, sheet_id: &str, tab: Option<&str>) -> String {
        let mut url = format!("{}/{}/gviz/tq?tqx=out:csv", self.base_url, sheet_id);
        if let Some(tab) = tab {
            url.push_str("&sheet=");
            url.push_str(tab);
        }
        url
    }

    // == Fetch Table ==
    /// Fetches a sheet tab as parsed rows, read-through cached.
    ///
    /// An empty `sheet_id` means the resource is unconfigured and yields
    /// an empty result immediately, without logging. Transport and status
    /// failures also degrade to an empty result: a broken upstream sheet
    /// must not take down unrelated resources, so callers never see an
    /// error from here.
    ///
    /// # Arguments
    /// * `sheet_id` - The public spreadsheet identifier
    /// * `tab` - Optional tab name within the spreadsheet
    /// * `bypass_cache` - Skip the cache lookup (the result is still stored)
    pub async fn fetch_table(
        &self,
        sheet_id: &str,
        tab: Option<&str>,
        bypass_cache: bool,
    ) -> Vec<TableRow> {
        if sheet_id.is_empty() {
            return Vec::new();
        }

        let key = table_cache_key(sheet_id, tab);

        if !bypass_cache {
            let mut cache = self.cache.write().await;
            if let Some(CachedValue::Table(rows)) = cache.get(&key) {
                return rows;
            }
        }

        // Lock released before the network round trip; two concurrent
        // misses may both fetch, last write wins.
        let url = self.csv_export_url(sheet_id, tab);
        let response = match self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Could not fetch sheet {}: {}", sheet_id, e);
                return Vec::new();
            }
        };

        let csv_text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not read sheet {} response body: {}", sheet_id, e);
                return Vec::new();
            }
        };

        let rows = parse_csv(&csv_text);

        let mut cache = self.cache.write().await;
        cache.set(key, CachedValue::Table(rows.clone()), None);

        rows
    }
}

// == Cache Key ==
/// Deterministic cache key for a (sheet, tab) pair.
///
/// Distinct sheets never collide, even when they share a tab name, and
/// the same sheet always maps to the same key.
pub fn table_cache_key(sheet_id: &str, tab: Option<&str>) -> String {
    format!("sheet:{}:{}", sheet_id, tab.unwrap_or("default"))
}

// == CSV Parsing ==
/// Parses CSV text into ordered name-keyed rows.
///
/// The first record is the header row; header names are preserved
/// verbatim since downstream consumers alias columns by exact name.
/// Short rows simply lack the trailing keys (no positional
/// misalignment), extra trailing cells are ignored, and duplicate
/// headers collapse last-wins. An empty or headers-only body parses to
/// an empty result.
pub fn parse_csv(text: &str) -> Vec<TableRow> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(text.as_bytes());

    let mut records = reader.records();

    let headers: Vec<String> = match records.next() {
        Some(Ok(record)) => record.iter().map(str::to_string).collect(),
        _ => return Vec::new(),
    };

    let mut rows = Vec::new();
    for record in records {
        let record = match record {
            Ok(record) => record,
            // A malformed record never aborts the whole parse
            Err(_) => continue,
        };

        let mut row = TableRow::new();
        for (i, header) in headers.iter().enumerate() {
            if let Some(cell) = record.get(i) {
                row.insert(header.clone(), cell.to_string());
            }
        }
        rows.push(row);
    }

    rows
}
