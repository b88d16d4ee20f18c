//! Cache trait definition

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::domain::DomainError;

/// Key-value cache with per-key expiration
///
/// Values travel as JSON strings so the trait stays dyn-compatible.
/// Use [`CacheExt`] for typed access.
#[async_trait]
pub trait Cache: Send + Sync + Debug {
    /// Gets a raw JSON value; expired entries read as `None`
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Sets a raw JSON value, overwriting any previous entry
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError>;

    /// Deletes a value, returning whether it was present
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;

    /// Deletes several keys, returning how many were present
    async fn delete_many(&self, keys: &[&str]) -> Result<usize, DomainError> {
        let mut removed = 0;

        for key in keys {
            if self.delete(key).await? {
                removed += 1;
            }
        }

        Ok(removed)
    }

    /// Checks if a key exists in the cache
    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.get_raw(key).await?.is_some())
    }

    /// Gets the remaining TTL for a key
    async fn ttl(&self, key: &str) -> Result<Option<Duration>, DomainError>;

    /// One round trip to the backend; process-local caches are always reachable
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

/// Extension trait providing typed get/set operations
pub trait CacheExt: Cache {
    /// Gets a typed value from the cache
    fn get<'a, V>(
        &'a self,
        key: &'a str,
    ) -> impl std::future::Future<Output = Result<Option<V>, DomainError>> + Send
    where
        V: DeserializeOwned + Send,
    {
        async move {
            match self.get_raw(key).await? {
                Some(data) => {
                    let value: V = serde_json::from_str(&data).map_err(|e| {
                        DomainError::cache(format!("Failed to deserialize cache value: {}", e))
                    })?;
                    Ok(Some(value))
                }
                None => Ok(None),
            }
        }
    }

    /// Sets a typed value in the cache with a TTL
    fn set<'a, V>(
        &'a self,
        key: &'a str,
        value: &'a V,
        ttl: Duration,
    ) -> impl std::future::Future<Output = Result<(), DomainError>> + Send
    where
        V: Serialize + Send + Sync,
    {
        async move {
            let data = serde_json::to_string(value).map_err(|e| {
                DomainError::cache(format!("Failed to serialize cache value: {}", e))
            })?;
            self.set_raw(key, &data, ttl).await
        }
    }
}

impl<T: Cache + ?Sized> CacheExt for T {}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Mock cache for testing
    ///
    /// Counts calls and can be switched into a failing state at any point.
    #[derive(Debug, Default)]
    pub struct MockCache {
        entries: Mutex<HashMap<String, (String, Option<Duration>)>>,
        failing: AtomicBool,
        gets: AtomicUsize,
        sets: AtomicUsize,
        deletes: AtomicUsize,
    }

    impl MockCache {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_entry<V: Serialize>(self, key: &str, value: &V) -> Self {
            let json = serde_json::to_string(value).unwrap();
            self.with_raw_entry(key, &json)
        }

        pub fn with_raw_entry(self, key: &str, raw: &str) -> Self {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), (raw.to_string(), None));
            self
        }

        pub fn with_error(self) -> Self {
            self.set_failing(true);
            self
        }

        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        pub fn contains(&self, key: &str) -> bool {
            self.entries.lock().unwrap().contains_key(key)
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.entries
                .lock()
                .unwrap()
                .get(key)
                .map(|(json, _)| json.clone())
        }

        pub fn get_calls(&self) -> usize {
            self.gets.load(Ordering::SeqCst)
        }

        pub fn set_calls(&self) -> usize {
            self.sets.load(Ordering::SeqCst)
        }

        pub fn delete_calls(&self) -> usize {
            self.deletes.load(Ordering::SeqCst)
        }

        fn check_error(&self) -> Result<(), DomainError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(DomainError::cache("Connection refused"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl Cache for MockCache {
        async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError> {
            self.gets.fetch_add(1, Ordering::SeqCst);
            self.check_error()?;
            Ok(self.raw(key))
        }

        async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
            self.sets.fetch_add(1, Ordering::SeqCst);
            self.check_error()?;
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), (value.to_string(), Some(ttl)));
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<bool, DomainError> {
            self.deletes.fetch_add(1, Ordering::SeqCst);
            self.check_error()?;
            Ok(self.entries.lock().unwrap().remove(key).is_some())
        }

        async fn ttl(&self, key: &str) -> Result<Option<Duration>, DomainError> {
            self.check_error()?;
            let entries = self.entries.lock().unwrap();

            Ok(entries.get(key).and_then(|(_, ttl)| *ttl))
        }

        async fn ping(&self) -> Result<(), DomainError> {
            self.check_error()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_cache_set_get() {
            let cache = MockCache::new();
            cache
                .set("key1", &"value1", Duration::from_secs(60))
                .await
                .unwrap();

            let result: Option<String> = cache.get("key1").await.unwrap();
            assert_eq!(result, Some("value1".to_string()));
            assert_eq!(
                cache.ttl("key1").await.unwrap(),
                Some(Duration::from_secs(60))
            );
        }

        #[tokio::test]
        async fn test_mock_cache_get_missing() {
            let cache = MockCache::new();

            let result: Option<String> = cache.get("missing").await.unwrap();
            assert!(result.is_none());
            assert_eq!(cache.get_calls(), 1);
        }

        #[tokio::test]
        async fn test_mock_cache_delete_many() {
            let cache = MockCache::new()
                .with_entry("projects", &1)
                .with_entry("projects:featured", &2)
                .with_entry("skills", &3);

            let removed = cache
                .delete_many(&["projects", "projects:featured", "projects:non-featured"])
                .await
                .unwrap();

            assert_eq!(removed, 2);
            assert!(!cache.contains("projects"));
            assert!(cache.contains("skills"));
        }

        #[tokio::test]
        async fn test_mock_cache_corrupt_value_fails_typed_get() {
            let cache = MockCache::new().with_raw_entry("profile", "{not json");

            let result: Result<Option<Vec<String>>, _> = cache.get("profile").await;
            assert!(matches!(result, Err(DomainError::Cache { .. })));
        }

        #[tokio::test]
        async fn test_mock_cache_with_error() {
            let cache = MockCache::new().with_error();

            let result: Result<Option<String>, _> = cache.get("key").await;
            assert!(result.is_err());

            cache.set_failing(false);
            let result: Option<String> = cache.get("key").await.unwrap();
            assert!(result.is_none());
        }

        #[tokio::test]
        async fn test_mock_cache_ping_follows_failure_switch() {
            let cache = MockCache::new();
            assert!(cache.ping().await.is_ok());

            cache.set_failing(true);
            assert!(cache.ping().await.is_err());
        }
    }
}
