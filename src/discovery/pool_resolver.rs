use crate::core::{Address, PoolSnapshot, QuoteError, QuoteResult};
use crate::discovery::PoolCache;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Capability: locate the pool for a token pair and report its reserves.
#[async_trait::async_trait]
pub trait PoolResolver: Send + Sync {
    /// Returns [`QuoteError::PoolNotFound`] when no pool exists for the pair.
    async fn resolve(&self, token_a: &Address, token_b: &Address) -> QuoteResult<PoolSnapshot>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PoolFile {
    pools: Vec<PoolSnapshot>,
}

/// In-memory resolver over a fixed set of pool snapshots
#[derive(Debug, Default)]
pub struct StaticPoolResolver {
    pools: HashMap<(Address, Address), PoolSnapshot>,
}

impl StaticPoolResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshots(snapshots: impl IntoIterator<Item = PoolSnapshot>) -> QuoteResult<Self> {
        let mut resolver = Self::new();
        for snapshot in snapshots {
            resolver.insert(snapshot)?;
        }
        Ok(resolver)
    }

    /// Parse `{"pools": [...]}`
    pub fn from_json(json: &str) -> QuoteResult<Self> {
        let file: PoolFile = serde_json::from_str(json)?;
        Self::from_snapshots(file.pools)
    }

    pub fn from_file(path: impl AsRef<Path>) -> QuoteResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let resolver = Self::from_json(&json)?;
        info!("Loaded {} pools from {}", resolver.len(), path.display());
        Ok(resolver)
    }

    /// Add or replace the pool for the snapshot's pair
    pub fn insert(&mut self, snapshot: PoolSnapshot) -> QuoteResult<()> {
        if snapshot.token0 == snapshot.token1 {
            return Err(QuoteError::InvalidPool(format!(
                "Pool lists {} on both sides",
                snapshot.token0
            )));
        }
        let key = pair_key(&snapshot.token0, &snapshot.token1);
        self.pools.insert(key, snapshot);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// All snapshots, ordered by pair for stable output
    pub fn snapshots(&self) -> Vec<&PoolSnapshot> {
        let mut keys: Vec<_> = self.pools.keys().collect();
        keys.sort();
        keys.into_iter().filter_map(|k| self.pools.get(k)).collect()
    }
}

#[async_trait::async_trait]
impl PoolResolver for StaticPoolResolver {
    async fn resolve(&self, token_a: &Address, token_b: &Address) -> QuoteResult<PoolSnapshot> {
        self.pools
            .get(&pair_key(token_a, token_b))
            .cloned()
            .ok_or_else(|| QuoteError::PoolNotFound(token_a.to_string(), token_b.to_string()))
    }
}

/// Wraps another resolver with a TTL cache
pub struct CachedPoolResolver<R> {
    inner: R,
    cache: PoolCache,
}

impl<R: PoolResolver> CachedPoolResolver<R> {
    pub fn new(inner: R, cache: PoolCache) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &PoolCache {
        &self.cache
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

#[async_trait::async_trait]
impl<R: PoolResolver> PoolResolver for CachedPoolResolver<R> {
    async fn resolve(&self, token_a: &Address, token_b: &Address) -> QuoteResult<PoolSnapshot> {
        let key = (token_a.clone(), token_b.clone());
        if let Some(snapshot) = self.cache.get(&key).await {
            debug!("Pool cache hit for {}/{}", token_a, token_b);
            return Ok(snapshot);
        }

        // failures are not cached
        let snapshot = self.inner.resolve(token_a, token_b).await?;
        self.cache.set(key, snapshot.clone()).await;
        Ok(snapshot)
    }
}

fn pair_key(a: &Address, b: &Address) -> (Address, Address) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}
