//! Cache Module
//!
//! In-memory key-value caching with per-entry TTL expiration. Expired
//! entries are evicted lazily on access; `sweep` is an optional proactive
//! maintenance hook.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::CacheStats;
pub use store::TtlCache;
