use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub data: Vec<u8>,
    pub inserted_at: Instant,
    pub expires_at: Instant,
}

impl CacheEntry {
    pub fn new(data: Vec<u8>, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            data,
            inserted_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }

    pub fn age(&self) -> Duration {
        Instant::now().saturating_duration_since(self.inserted_at)
    }
}

/// In-memory cache for fetched image bytes, keyed by resolved upstream URL.
///
/// Expired entries are treated as absent at lookup time; a background sweep
/// calls `purge_expired` to reclaim them. Two concurrent misses for the same
/// URL may both fetch and both store; last writer wins and either set of
/// bytes is a valid response for the key.
pub struct ImageCache {
    images: RwLock<HashMap<String, CacheEntry>>,
    pub cache_duration: Duration,
}

impl ImageCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            images: RwLock::new(HashMap::new()),
            cache_duration: ttl,
        }
    }

    pub fn get_image(&self, url: &str) -> Option<Vec<u8>> {
        let images = self.images.read();

        if let Some(entry) = images.get(url) {
            if !entry.is_expired() {
                return Some(entry.data.clone());
            }
        }

        None
    }

    pub fn store_image(&self, url: &str, data: Vec<u8>) {
        let mut images = self.images.write();
        images.insert(url.to_string(), CacheEntry::new(data, self.cache_duration));
    }

    /// Remove every entry past its expiry. Returns the number purged.
    pub fn purge_expired(&self) -> usize {
        let mut images = self.images.write();
        let before = images.len();
        images.retain(|_, entry| !entry.is_expired());
        before - images.len()
    }

    pub fn len(&self) -> usize {
        self.images.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.read().is_empty()
    }
}
