//! Bounded LRU cache for catalog API responses.
//!
//! Avoids redundant upstream calls for repeated queries within the process
//! lifetime. The cache is injected into the client so capacity and lifecycle
//! are controlled by the caller. Concurrent misses for the same key are not
//! coalesced; both fetch and both insert, last write wins. Values for a given
//! key are equivalent, so the race is benign.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;

use super::types::{CatalogDetails, CatalogItem, ItemKind, VersionRecord};

/// Default capacity for each of the per-operation caches.
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Thread-safe LRU cache over the catalog client's four operations.
pub struct CatalogCache {
    searches: Mutex<LruCache<String, Vec<CatalogItem>>>,
    details: Mutex<LruCache<String, CatalogDetails>>,
    batches: Mutex<LruCache<String, Vec<CatalogDetails>>>,
    versions: Mutex<LruCache<String, Vec<VersionRecord>>>,
}

impl CatalogCache {
    /// Create a cache holding up to `capacity` entries per operation.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            searches: Mutex::new(LruCache::new(capacity)),
            details: Mutex::new(LruCache::new(capacity)),
            batches: Mutex::new(LruCache::new(capacity)),
            versions: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Search key: lowercased query plus the kind filter.
    pub fn search_key(query: &str, kind: Option<ItemKind>) -> String {
        let kind = match kind {
            Some(k) => k.upstream_name(),
            None => "all",
        };
        format!("{}:{}", query.to_lowercase(), kind)
    }

    /// Batch key: sorted, joined id list.
    pub fn batch_key(ids: &[String]) -> String {
        let mut sorted = ids.to_vec();
        sorted.sort();
        sorted.join(",")
    }

    pub fn get_search(&self, key: &str) -> Option<Vec<CatalogItem>> {
        self.searches.lock().ok()?.get(key).cloned()
    }

    pub fn put_search(&self, key: String, items: Vec<CatalogItem>) {
        if let Ok(mut cache) = self.searches.lock() {
            cache.put(key, items);
        }
    }

    pub fn get_details(&self, id: &str) -> Option<CatalogDetails> {
        self.details.lock().ok()?.get(id).cloned()
    }

    pub fn put_details(&self, id: String, details: CatalogDetails) {
        if let Ok(mut cache) = self.details.lock() {
            cache.put(id, details);
        }
    }

    pub fn get_batch(&self, key: &str) -> Option<Vec<CatalogDetails>> {
        self.batches.lock().ok()?.get(key).cloned()
    }

    pub fn put_batch(&self, key: String, details: Vec<CatalogDetails>) {
        if let Ok(mut cache) = self.batches.lock() {
            cache.put(key, details);
        }
    }

    pub fn get_versions(&self, id: &str) -> Option<Vec<VersionRecord>> {
        self.versions.lock().ok()?.get(id).cloned()
    }

    pub fn put_versions(&self, id: String, versions: Vec<VersionRecord>) {
        if let Ok(mut cache) = self.versions.lock() {
            cache.put(id, versions);
        }
    }

    /// Entry counts per operation: (searches, details, batches, versions).
    pub fn stats(&self) -> (usize, usize, usize, usize) {
        let searches = self.searches.lock().map(|c| c.len()).unwrap_or(0);
        let details = self.details.lock().map(|c| c.len()).unwrap_or(0);
        let batches = self.batches.lock().map(|c| c.len()).unwrap_or(0);
        let versions = self.versions.lock().map(|c| c.len()).unwrap_or(0);
        (searches, details, batches, versions)
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).expect("capacity is non-zero"))
    }
}
