use crate::core::{Address, PoolSnapshot};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

type PairKey = (Address, Address);

/// Cache entry with TTL
#[derive(Clone)]
struct CacheEntry {
    snapshot: PoolSnapshot,
    expires_at: Instant,
}

/// Thread-safe pool snapshot cache with TTL
pub struct PoolCache {
    cache: Arc<DashMap<PairKey, CacheEntry>>,
    ttl: Duration,
}

impl PoolCache {
    pub fn new(ttl_secs: u64) -> Self {
        Self::with_ttl(Duration::from_secs(ttl_secs))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            cache: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Get a snapshot from cache if not expired
    pub async fn get(&self, key: &PairKey) -> Option<PoolSnapshot> {
        let expired = match self.cache.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => {
                return Some(entry.snapshot.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.invalidate(key).await;
        }

        None
    }

    /// Store a snapshot under both key orderings
    pub async fn set(&self, key: PairKey, snapshot: PoolSnapshot) {
        let entry = CacheEntry {
            snapshot,
            expires_at: Instant::now() + self.ttl,
        };

        self.cache.insert((key.1.clone(), key.0.clone()), entry.clone());
        self.cache.insert(key, entry);
    }

    /// Invalidate cache entry
    pub async fn invalidate(&self, key: &PairKey) {
        self.cache.remove(key);
        self.cache.remove(&(key.1.clone(), key.0.clone()));
    }

    /// Clear all cache entries
    pub async fn clear(&self) {
        self.cache.clear();
    }

    /// Number of stored keys (each pair occupies two)
    pub fn size(&self) -> usize {
        self.cache.len()
    }

    /// Clean up expired entries
    pub async fn cleanup_expired(&self) {
        let now = Instant::now();
        self.cache.retain(|_, entry| entry.expires_at > now);
    }
}
