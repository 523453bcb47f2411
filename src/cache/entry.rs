//! Cache Entry Module
//!
//! Defines the structure for individual cache entries, including the
//! pagination link tokens stored alongside each payload.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached response plus the pagination cursors that came with it.
///
/// Entries are immutable once written: overwriting a key replaces the whole
/// entry (including `created_at`) rather than mutating fields in place.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The rendered response body
    pub payload: Vec<u8>,
    /// Instant of insertion, used only to compute age
    pub created_at: Instant,
    /// Forward link token, empty when the response had no next page
    pub next: String,
    /// Backward link token, empty when the response had no previous page
    pub previous: String,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    ///
    /// Link tokens are stored verbatim; the cache never interprets them.
    ///
    /// # Arguments
    /// * `payload` - The response body to cache
    /// * `next` - Forward link token (empty for "no next page")
    /// * `previous` - Backward link token (empty for "no previous page")
    pub fn new(payload: Vec<u8>, next: String, previous: String) -> Self {
        Self {
            payload,
            created_at: Instant::now(),
            next,
            previous,
        }
    }

    // == Age ==
    /// Returns the time elapsed since the entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl`.
    ///
    /// Boundary condition: an entry is expired once its age is greater than
    /// or equal to the TTL, so a sweep running exactly one TTL after
    /// insertion removes the entry.
    ///
    /// # Returns
    /// - `true` if the entry's age is >= `ttl`
    /// - `false` otherwise
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() >= ttl
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(b"page one".to_vec(), "next-url".to_string(), String::new());

        assert_eq!(entry.payload, b"page one");
        assert_eq!(entry.next, "next-url");
        assert!(entry.previous.is_empty());
        assert!(!entry.is_expired(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_keeps_link_tokens_verbatim() {
        let entry = CacheEntry::new(
            Vec::new(),
            "https://example.com/list?offset=40&limit=20".to_string(),
            "https://example.com/list?offset=0&limit=20".to_string(),
        );

        assert_eq!(entry.next, "https://example.com/list?offset=40&limit=20");
        assert_eq!(entry.previous, "https://example.com/list?offset=0&limit=20");
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new(b"v".to_vec(), String::new(), String::new());

        assert!(!entry.is_expired(Duration::from_secs(1)));

        sleep(Duration::from_millis(30));

        assert!(entry.is_expired(Duration::from_millis(20)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new(Vec::new(), String::new(), String::new());

        // Age >= ttl counts as expired, so a zero TTL expires immediately.
        assert!(entry.is_expired(Duration::ZERO));
    }

    #[test]
    fn test_age_grows() {
        let entry = CacheEntry::new(Vec::new(), String::new(), String::new());

        let first = entry.age();
        sleep(Duration::from_millis(10));

        assert!(entry.age() > first);
    }
}
