//! In-memory cache implementation using the moka crate.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;

use carlot_core::config::MemoryCacheConfig;
use carlot_core::result::AppResult;
use carlot_core::traits::cache::CacheProvider;

/// Expiry policy that reads the TTL stored next to each value.
#[derive(Debug, Clone, Copy)]
struct PerEntryTtl;

impl Expiry<String, (String, Duration)> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &(String, Duration),
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.1)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &(String, Duration),
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.1)
    }
}

/// In-memory cache provider using moka.
#[derive(Debug, Clone)]
pub struct MemoryCacheProvider {
    cache: Cache<String, (String, Duration)>,
    default_ttl: Duration,
}

impl MemoryCacheProvider {
    pub fn new(config: &MemoryCacheConfig, default_ttl_seconds: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self {
            cache,
            default_ttl: Duration::from_secs(default_ttl_seconds),
        }
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.cache.get(key).await.map(|(value, _)| value))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        self.cache
            .insert(key.to_string(), (value.to_string(), ttl))
            .await;
        Ok(())
    }

    async fn set_default(&self, key: &str, value: &str) -> AppResult<()> {
        self.set(key, value, self.default_ttl).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.cache.invalidate(key).await;
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> MemoryCacheProvider {
        MemoryCacheProvider::new(&MemoryCacheConfig { max_capacity: 100 }, 60)
    }

    #[tokio::test]
    async fn test_set_get_delete() {
        let cache = provider();
        assert_eq!(cache.get("car:1").await.unwrap(), None);
        cache.set_default("car:1", "{}").await.unwrap();
        assert_eq!(cache.get("car:1").await.unwrap().as_deref(), Some("{}"));
        cache.delete("car:1").await.unwrap();
        assert_eq!(cache.get("car:1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_ok() {
        assert!(provider().delete("car:absent").await.is_ok());
    }

    #[tokio::test]
    async fn test_entry_expires_after_its_ttl() {
        let cache = provider();
        cache
            .set("car:short", "v", Duration::from_millis(50))
            .await
            .unwrap();
        cache.set("car:long", "v", Duration::from_secs(60)).await.unwrap();

        std::thread::sleep(Duration::from_millis(120));

        assert_eq!(cache.get("car:short").await.unwrap(), None);
        assert_eq!(cache.get("car:long").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_json_helpers() {
        let cache = provider();
        cache
            .set_json("car:json", &vec![1, 2, 3], Duration::from_secs(5))
            .await
            .unwrap();
        let back: Option<Vec<i32>> = cache.get_json("car:json").await.unwrap();
        assert_eq!(back, Some(vec![1, 2, 3]));
    }
}
