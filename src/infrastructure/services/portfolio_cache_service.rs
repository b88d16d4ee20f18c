//! Read-through / write-invalidate policy over any [`Cache`] backend
//!
//! Cache trouble never reaches the caller: a failed or undecodable lookup is a
//! miss, and failed writes or deletes are logged and dropped. The store stays
//! the source of truth.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::domain::DomainError;
use crate::domain::cache::{Cache, CacheKey, CachedEntity};

/// Lifetime of every cached listing
pub const CACHE_TTL: Duration = Duration::from_secs(3600);

/// Configuration for the portfolio cache policy
#[derive(Debug, Clone)]
pub struct PortfolioCacheConfig {
    /// When disabled every lookup misses and nothing is written
    pub enabled: bool,
}

impl Default for PortfolioCacheConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl PortfolioCacheConfig {
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

#[derive(Debug, Clone)]
pub struct PortfolioCacheService {
    cache: Arc<dyn Cache>,
    config: PortfolioCacheConfig,
}

impl PortfolioCacheService {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self::with_config(cache, PortfolioCacheConfig::default())
    }

    pub fn with_config(cache: Arc<dyn Cache>, config: PortfolioCacheConfig) -> Self {
        Self { cache, config }
    }

    /// Returns the cached value, treating absence, expiry, decode failure and
    /// transport errors alike as a miss
    pub async fn lookup<V>(&self, key: CacheKey) -> Option<V>
    where
        V: DeserializeOwned + Send,
    {
        if !self.config.enabled {
            return None;
        }

        match self.cache.get_raw(key.as_str()).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => {
                    debug!(key = %key, "Cache hit");
                    Some(value)
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "Discarding undecodable cache entry");
                    None
                }
            },
            Ok(None) => {
                debug!(key = %key, "Cache miss");
                None
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Cache lookup failed, reading from store");
                None
            }
        }
    }

    /// Best-effort overwrite with the fixed TTL
    pub async fn populate<V>(&self, key: CacheKey, value: &V)
    where
        V: Serialize + Sync,
    {
        if !self.config.enabled {
            return;
        }

        let data = match serde_json::to_string(value) {
            Ok(data) => data,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to serialize value for cache");
                return;
            }
        };

        if let Err(e) = self.cache.set_raw(key.as_str(), &data, CACHE_TTL).await {
            warn!(key = %key, error = %e, "Failed to populate cache");
        }
    }

    /// Serves `key` from the cache, or loads it and caches the result
    ///
    /// A load failure is returned as-is; nothing cached is served in its place.
    pub async fn read_through<V, F, Fut>(&self, key: CacheKey, load: F) -> Result<V, DomainError>
    where
        V: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<V, DomainError>> + Send,
    {
        if let Some(cached) = self.lookup(key).await {
            return Ok(cached);
        }

        let value = load().await?;
        self.populate(key, &value).await;

        Ok(value)
    }

    /// Deletes every key derived from `entity`; call only after the store
    /// write has committed
    pub async fn invalidate(&self, entity: CachedEntity) {
        if !self.config.enabled {
            return;
        }

        let keys: Vec<&str> = entity.keys().iter().map(CacheKey::as_str).collect();

        match self.cache.delete_many(&keys).await {
            Ok(removed) => {
                debug!(entity = entity.name(), keys = ?keys, removed, "Invalidated cache keys")
            }
            Err(e) => warn!(
                entity = entity.name(),
                keys = ?keys,
                error = %e,
                "Cache invalidation failed, entries will expire on their own"
            ),
        }
    }

    /// Round trip to the backend, used by readiness checks
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.cache.ping().await
    }
}
