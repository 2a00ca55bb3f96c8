//! Fetch Module
//!
//! Read-through fetchers for the two upstream export formats: public
//! spreadsheets (CSV export) and public documents (HTML export). Both
//! fetchers consult the same shared cache instance under disjoint key
//! namespaces (`sheet:` and `doc:`) and degrade gracefully to "no data"
//! when the upstream is unreachable.

mod docs;
mod sanitize;
mod sheets;

// Re-export public types
pub use docs::{resolve_doc_id, DocsClient};
pub use sanitize::clean_doc_html;
pub use sheets::{parse_csv, table_cache_key, SheetsClient};

use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::cache::TtlCache;

// == Table Row ==
/// One parsed spreadsheet row: an ordered mapping from header name to raw
/// cell text. Column order reflects source header order; lookup is by
/// exact name, accents and punctuation included.
pub type TableRow = IndexMap<String, String>;

// == Cached Value ==
/// Payload stored in the shared cache.
///
/// The two fetchers use disjoint key namespaces, so a key only ever maps
/// to the variant its namespace owns.
#[derive(Debug, Clone)]
pub enum CachedValue {
    /// Parsed rows of one sheet tab
    Table(Vec<TableRow>),
    /// Sanitized HTML fragment of one document
    Document(String),
}

// == Shared Cache ==
/// Shared handle to the process-local cache, owned by the composition
/// root and passed by reference to both fetchers. Lock scope covers only
/// map access, never a network round trip.
pub type SharedCache = Arc<RwLock<TtlCache<CachedValue>>>;

/// Creates a shared cache with the given default TTL in seconds.
pub fn shared_cache(default_ttl: u64) -> SharedCache {
    Arc::new(RwLock::new(TtlCache::new(default_ttl)))
}
