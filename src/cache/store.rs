//! Cache Store Module
//!
//! Generic key-value store with per-entry TTL expiration. Expired entries
//! are evicted lazily on the access that discovers them; `sweep` offers an
//! optional proactive pass for periodic maintenance.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats};

// == TTL Cache ==
/// In-memory TTL cache mapping string keys to cloneable payloads.
///
/// The store itself is single-threaded; the application wraps one instance
/// in `Arc<RwLock<_>>` owned by the composition root and shares it between
/// the fetchers. Lock scope is the caller's concern and must never span
/// network I/O.
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Default TTL in seconds for entries stored without an explicit TTL
    default_ttl: u64,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    /// Creates a new TtlCache with the given default TTL in seconds.
    pub fn new(default_ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` for both missing and expired keys; an expired entry
    /// is removed before returning. Absence is a normal outcome, not a
    /// failure.
    pub fn get(&mut self, key: &str) -> Option<V> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                self.entries.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                return None;
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            return Some(value);
        }

        self.stats.record_miss();
        None
    }

    // == Set ==
    /// Stores a key-value pair with optional TTL in seconds.
    ///
    /// Overwrites any existing entry unconditionally (last write wins, no
    /// merge) and resets the TTL. A TTL of zero stores an entry that is
    /// already expired.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The payload to store
    /// * `ttl` - Optional TTL in seconds (uses default_ttl if None)
    pub fn set(&mut self, key: String, value: V, ttl: Option<u64>) {
        let entry = CacheEntry::new(value, ttl.unwrap_or(self.default_ttl));
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Returns true iff an entry was present, live or expired.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Clear ==
    /// Drops all entries immediately, regardless of expiry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Sweep ==
    /// Removes all currently-expired entries.
    ///
    /// Returns the number of entries removed. Never required for `get`
    /// correctness; expired entries are also evicted lazily on access.
    pub fn sweep(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
