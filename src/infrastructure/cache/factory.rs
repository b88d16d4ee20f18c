//! Cache factory for runtime selection

use std::sync::Arc;

use tracing::info;

use crate::config::{CacheBackend, CacheConfig};
use crate::domain::DomainError;
use crate::domain::cache::Cache;

use super::in_memory::{InMemoryCache, InMemoryCacheConfig};
use super::redis::{RedisCache, RedisCacheConfig};

/// Factory for creating cache instances
#[derive(Debug, Default)]
pub struct CacheFactory;

impl CacheFactory {
    pub fn new() -> Self {
        Self
    }

    /// Creates the backend selected by configuration
    pub async fn create(&self, config: &CacheConfig) -> Result<Arc<dyn Cache>, DomainError> {
        match config.backend {
            CacheBackend::InMemory => {
                info!(max_capacity = config.max_capacity, "Using in-memory cache");
                Ok(self.create_in_memory(config.max_capacity))
            }
            CacheBackend::Redis => {
                let url = config.redis_url.clone().ok_or_else(|| {
                    DomainError::configuration("Redis URL is required for Redis cache backend")
                })?;

                info!(prefix = %config.key_prefix, "Connecting to Redis cache");
                let redis_config =
                    RedisCacheConfig::new(url).with_key_prefix(config.key_prefix.clone());
                let cache = RedisCache::new(redis_config).await?;
                Ok(Arc::new(cache))
            }
        }
    }

    pub fn create_in_memory(&self, max_capacity: u64) -> Arc<dyn Cache> {
        Arc::new(InMemoryCache::with_config(
            InMemoryCacheConfig::default().with_max_capacity(max_capacity),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::CacheExt;
    use std::time::Duration;

    #[tokio::test]
    async fn test_factory_create_in_memory() {
        let cache = CacheFactory::new()
            .create(&CacheConfig::default())
            .await
            .unwrap();

        cache
            .set("skills", &"value", Duration::from_secs(60))
            .await
            .unwrap();

        let result: Option<String> = cache.get("skills").await.unwrap();
        assert_eq!(result, Some("value".to_string()));
    }

    #[tokio::test]
    async fn test_factory_create_redis_missing_url() {
        let config = CacheConfig {
            backend: CacheBackend::Redis,
            redis_url: None,
            ..Default::default()
        };

        let result = CacheFactory::new().create(&config).await;
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }
}
