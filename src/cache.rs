//! Bounded least-recently-used cache of merge results

use lru::LruCache;
use parking_lot::Mutex;
use serde::Serialize;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// Snapshot of the cache counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub capacity: usize,
    pub len: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Maps input class lists to merged results.
///
/// A capacity of 0 disables caching: every lookup computes and nothing is
/// stored. The lock is held across the computation, so two threads asking
/// for the same input never both compute it.
#[derive(Debug)]
pub struct ResultCache {
    entries: Option<Mutex<LruCache<String, String>>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResultCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(|size| Mutex::new(LruCache::new(size))),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, |entries| entries.lock().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached result for `key`, or the result of `compute` which is then stored.
    /// Storing into a full cache evicts the least recently used entry.
    pub fn get_or_compute<F>(&self, key: &str, compute: F) -> String
    where
        F: FnOnce(&str) -> String,
    {
        let entries = match &self.entries {
            Some(entries) => entries,
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                return compute(key);
            }
        };

        let mut entries = entries.lock();
        if let Some(cached) = entries.get(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(key, "Cache hit");
            return cached.clone();
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let value = compute(key);
        entries.put(key.to_string(), value.clone());
        value
    }

    pub fn clear(&self) {
        if let Some(entries) = &self.entries {
            entries.lock().clear();
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            capacity: self.capacity,
            len: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
