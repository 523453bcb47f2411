//! Cache Store Module
//!
//! Main cache engine: a HashMap of response payloads behind one exclusive
//! lock, shared with a background sweep task that evicts aged entries.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::cache::{CacheEntry, CacheStats};
use crate::error::{PokedexError, Result};
use crate::tasks::spawn_sweep_task;

/// An owned copy of a cache hit: the payload plus both pagination link tokens
/// stored alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedResponse {
    pub payload: Vec<u8>,
    pub next: String,
    pub previous: String,
}

/// State shared between the cache handles and the sweep task.
///
/// The sweeper only ever holds a `Weak` to this, so dropping the last
/// `TimedCache` handle tears the task down rather than leaking it.
#[derive(Debug)]
pub(crate) struct CacheState {
    /// Entry map and counters behind a single exclusive lock
    store: Mutex<Store>,
    /// Entry lifetime, fixed at construction; doubles as the sweep period
    ttl: Duration,
    /// Handle to the sweep task, aborted on shutdown or final drop
    sweeper: StdMutex<Option<JoinHandle<()>>>,
}

/// Everything the lock guards: the entries and the hit/miss/sweep counters.
#[derive(Debug)]
struct Store {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

/// Thread-safe TTL cache keyed by request URL.
///
/// Cloning is cheap and every clone shares the same entries, counters, and
/// sweep task.
#[derive(Debug, Clone)]
pub struct TimedCache {
    inner: Arc<CacheState>,
}

impl TimedCache {
    // == Constructor ==

    /// Creates a cache whose entries expire after `ttl` and starts the
    /// background sweep task that enforces it.
    ///
    /// The sweep period equals the TTL, so an entry is removed somewhere
    /// between one and two lifetimes after insertion. A zero TTL is rejected
    /// because every entry would be born expired.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(ttl: Duration) -> Result<Self> {
        if ttl.is_zero() {
            return Err(PokedexError::InvalidTtl);
        }

        let inner = CacheState::new(ttl);

        let handle = spawn_sweep_task(Arc::downgrade(&inner), ttl);
        if let Ok(mut guard) = inner.sweeper.lock() {
            *guard = Some(handle);
        }

        Ok(Self { inner })
    }

    // == Core Operations ==

    /// Inserts or replaces the entry for `key`, stamping it with the current
    /// time.
    ///
    /// Re-adding an existing key overwrites the payload and both link tokens
    /// wholesale and restarts its lifetime. Keys are opaque; the empty string
    /// is as valid as any other.
    pub async fn add(
        &self,
        key: impl Into<String>,
        payload: Vec<u8>,
        next: impl Into<String>,
        previous: impl Into<String>,
    ) {
        let entry = CacheEntry::new(payload, next.into(), previous.into());

        let mut store = self.inner.store.lock().await;
        store.entries.insert(key.into(), entry);
        let count = store.entries.len();
        store.stats.set_entries(count);
    }

    /// Looks up `key`, returning an owned copy of the payload and link tokens
    /// on a hit.
    ///
    /// A hit never refreshes the entry's age: reading does not extend life,
    /// and an entry past its TTL is still served until the sweep removes it.
    /// A miss is an `Option`, not an error.
    pub async fn get(&self, key: &str) -> Option<CachedResponse> {
        let mut store = self.inner.store.lock().await;

        let hit = store.entries.get(key).map(|entry| CachedResponse {
            payload: entry.payload.clone(),
            next: entry.next.clone(),
            previous: entry.previous.clone(),
        });

        match hit {
            Some(response) => {
                store.stats.record_hit();
                Some(response)
            }
            None => {
                store.stats.record_miss();
                None
            }
        }
    }

    // == Introspection ==

    /// Number of entries currently stored, expired or not.
    pub async fn len(&self) -> usize {
        self.inner.store.lock().await.entries.len()
    }

    /// Returns true if the cache holds no entries.
    #[allow(dead_code)]
    pub async fn is_empty(&self) -> bool {
        self.inner.store.lock().await.entries.is_empty()
    }

    /// Snapshot of the hit/miss/sweep counters.
    pub async fn stats(&self) -> CacheStats {
        let store = self.inner.store.lock().await;
        let mut stats = store.stats.clone();
        stats.set_entries(store.entries.len());
        stats
    }

    /// The lifetime every entry was created with.
    pub fn ttl(&self) -> Duration {
        self.inner.ttl
    }

    // == Shutdown ==

    /// Stops the background sweep task.
    ///
    /// Entries already stored stay readable, but nothing expires afterwards.
    /// Calling this twice is harmless; dropping the last handle has the same
    /// effect.
    pub fn shutdown(&self) {
        if let Ok(mut guard) = self.inner.sweeper.lock() {
            if let Some(handle) = guard.take() {
                handle.abort();
            }
        }
    }
}

impl CacheState {
    /// Fresh state with no entries and no sweeper attached yet.
    pub(crate) fn new(ttl: Duration) -> Arc<Self> {
        Arc::new(CacheState {
            store: Mutex::new(Store {
                entries: HashMap::new(),
                stats: CacheStats::new(),
            }),
            ttl,
            sweeper: StdMutex::new(None),
        })
    }

    // == Sweep ==

    /// Removes every entry whose age has reached the TTL, returning how many
    /// were evicted. Called by the sweep task once per period.
    pub(crate) async fn remove_expired(&self) -> usize {
        let ttl = self.ttl;

        let mut store = self.store.lock().await;
        let before = store.entries.len();
        store.entries.retain(|_, entry| !entry.is_expired(ttl));
        let removed = before - store.entries.len();

        let count = store.entries.len();
        store.stats.record_swept(removed as u64);
        store.stats.set_entries(count);

        removed
    }
}

impl Drop for CacheState {
    fn drop(&mut self) {
        // Last handle gone: stop the sweeper now instead of waiting for its
        // Weak upgrade to fail at the next tick.
        if let Ok(mut guard) = self.sweeper.lock() {
            if let Some(handle) = guard.take() {
                handle.abort();
            }
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn cache(ttl_ms: u64) -> TimedCache {
        TimedCache::new(Duration::from_millis(ttl_ms)).unwrap()
    }

    #[tokio::test]
    async fn test_zero_ttl_rejected() {
        let result = TimedCache::new(Duration::ZERO);
        assert!(matches!(result, Err(PokedexError::InvalidTtl)));
    }

    #[tokio::test]
    async fn test_add_and_get_round_trip() {
        let cache = cache(60_000);
        cache
            .add(
                "https://example.com/page1",
                b"payload".to_vec(),
                "https://example.com/page2",
                "",
            )
            .await;

        let hit = cache.get("https://example.com/page1").await.unwrap();
        assert_eq!(hit.payload, b"payload".to_vec());
        assert_eq!(hit.next, "https://example.com/page2");
        assert_eq!(hit.previous, "");
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let cache = cache(60_000);
        assert!(cache.get("never-added").await.is_none());
    }

    #[tokio::test]
    async fn test_overwrite_replaces_wholesale() {
        let cache = cache(60_000);
        cache.add("key", b"first".to_vec(), "next-a", "prev-a").await;
        cache.add("key", b"second".to_vec(), "next-b", "prev-b").await;

        let hit = cache.get("key").await.unwrap();
        assert_eq!(hit.payload, b"second".to_vec());
        assert_eq!(hit.next, "next-b");
        assert_eq!(hit.previous, "prev-b");
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_empty_key_is_valid() {
        let cache = cache(60_000);
        cache.add("", b"anonymous".to_vec(), "", "").await;
        let hit = cache.get("").await.unwrap();
        assert_eq!(hit.payload, b"anonymous".to_vec());
    }

    #[tokio::test]
    async fn test_keys_are_isolated() {
        let cache = cache(60_000);
        cache.add("one", b"1".to_vec(), "n1", "p1").await;
        cache.add("two", b"2".to_vec(), "n2", "p2").await;

        assert_eq!(cache.get("one").await.unwrap().payload, b"1".to_vec());
        assert_eq!(cache.get("two").await.unwrap().payload, b"2".to_vec());
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn test_stats_track_hits_and_misses() {
        let cache = cache(60_000);
        cache.add("key", b"value".to_vec(), "", "").await;

        cache.get("key").await;
        cache.get("key").await;
        cache.get("absent").await;

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
    }

    #[tokio::test]
    async fn test_remove_expired_evicts_only_aged_entries() {
        // Sweeper stopped so the manual sweep below is the only one running.
        let cache = cache(50);
        cache.shutdown();

        cache.add("old", b"old".to_vec(), "", "").await;
        tokio::time::sleep(Duration::from_millis(80)).await;
        cache.add("fresh", b"fresh".to_vec(), "", "").await;

        let removed = cache.inner.remove_expired().await;
        assert_eq!(removed, 1);
        assert!(cache.get("old").await.is_none());
        assert!(cache.get("fresh").await.is_some());
    }

    #[tokio::test]
    async fn test_get_does_not_extend_life() {
        let cache = cache(50);
        cache.shutdown();

        cache.add("key", b"value".to_vec(), "", "").await;

        // Repeated reads must not reset created_at.
        for _ in 0..4 {
            cache.get("key").await;
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        let removed = cache.inner.remove_expired().await;
        assert_eq!(removed, 1);
    }

    #[tokio::test]
    async fn test_shutdown_halts_expiry() {
        let cache = cache(30);
        cache.shutdown();
        cache.add("key", b"value".to_vec(), "", "").await;

        tokio::time::sleep(Duration::from_millis(120)).await;

        // With the sweeper stopped the aged entry is still served.
        assert!(cache.get("key").await.is_some());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let cache = cache(60_000);
        let other = cache.clone();

        cache.add("key", b"shared".to_vec(), "", "").await;
        assert_eq!(other.get("key").await.unwrap().payload, b"shared".to_vec());

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 1);
    }
}
