//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.
//! Correctness of `get` never depends on this task running; expired
//! entries are also evicted lazily on access. The sweep just keeps the
//! map from accumulating dead entries between accesses.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::fetch::SharedCache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. The write lock is held only for the duration of the
/// in-memory sweep, never across any I/O.
///
/// # Arguments
/// * `cache` - Shared cache handle
/// * `sweep_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_sweep_task(cache: SharedCache, sweep_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and remove expired entries
            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.sweep()
            };

            // Log sweep statistics
            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{shared_cache, CachedValue};
    use std::time::Duration;

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let cache = shared_cache(300);

        // Add an entry with very short TTL
        {
            let mut cache_guard = cache.write().await;
            cache_guard.set(
                "doc:expire_soon".to_string(),
                CachedValue::Document("value".to_string()),
                Some(1),
            );
        }

        // Spawn sweep task with 1 second interval
        let handle = spawn_sweep_task(cache.clone(), 1);

        // Wait for entry to expire and sweep to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        // Verify entry was removed without any access triggering eviction
        {
            let cache_guard = cache.read().await;
            assert!(cache_guard.is_empty(), "Expired entry should have been swept");
        }

        // Abort the sweep task
        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_valid_entries() {
        let cache = shared_cache(300);

        // Add an entry with long TTL
        {
            let mut cache_guard = cache.write().await;
            cache_guard.set(
                "doc:long_lived".to_string(),
                CachedValue::Document("value".to_string()),
                Some(3600),
            );
        }

        // Spawn sweep task
        let handle = spawn_sweep_task(cache.clone(), 1);

        // Wait for a sweep to run
        tokio::time::sleep(Duration::from_millis(1500)).await;

        // Verify entry still exists
        {
            let mut cache_guard = cache.write().await;
            let result = cache_guard.get("doc:long_lived");
            assert!(
                matches!(result, Some(CachedValue::Document(ref v)) if v.as_str() == "value"),
                "Valid entry should not be removed"
            );
        }

        // Abort the sweep task
        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let cache = shared_cache(300);

        let handle = spawn_sweep_task(cache, 1);

        // Abort immediately
        handle.abort();

        // Wait a bit and verify task is finished
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
