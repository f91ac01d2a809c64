//! Cache-aside facade over the durable car store.
//!
//! The store is authoritative. Cache writes and deletes are best-effort:
//! their failures are logged and swallowed. Cache reads fail closed, so a
//! corrupt or unreachable cache fails `get` instead of being skipped.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use carlot_cache::CacheManager;
use carlot_cache::keys;
use carlot_core::error::AppError;
use carlot_core::result::AppResult;
use carlot_core::traits::CacheProvider;
use carlot_core::types::CarId;
use carlot_database::store::CarStore;
use carlot_entity::car::Car;

#[derive(Debug, Clone)]
pub struct CachedCarRepository {
    store: Arc<dyn CarStore>,
    cache: Arc<CacheManager>,
    ttl: Duration,
}

impl CachedCarRepository {
    pub fn new(store: Arc<dyn CarStore>, cache: Arc<CacheManager>, ttl: Duration) -> Self {
        Self { store, cache, ttl }
    }

    /// Store first; the cache is only populated once the row exists.
    pub async fn create(&self, car: &Car) -> AppResult<()> {
        self.store.create(car).await?;
        self.populate(car).await;
        Ok(())
    }

    /// Cache hit returns without touching the store. A miss reads through
    /// and repopulates.
    pub async fn get(&self, id: CarId) -> AppResult<Car> {
        let key = keys::car_by_id(id);
        if let Some(car) = self.cache.get_json::<Car>(&key).await? {
            debug!(car_id = %id, "Car cache hit");
            return Ok(car);
        }

        let car = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Car {id} not found")))?;

        self.populate(&car).await;
        Ok(car)
    }

    /// Invalidate, write, repopulate. If the write fails the entry stays
    /// evicted and the next `get` reads the old row from the store.
    pub async fn update(&self, car: &Car) -> AppResult<()> {
        self.evict(car.id).await;

        if !self.store.update(car).await? {
            return Err(AppError::not_found(format!("Car {} not found", car.id)));
        }

        self.populate(car).await;
        Ok(())
    }

    /// Store first; the cache is left alone if the store delete fails.
    pub async fn delete(&self, id: CarId) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(AppError::not_found(format!("Car {id} not found")));
        }

        self.evict(id).await;
        Ok(())
    }

    /// Always served by the store; the cache holds point lookups only.
    pub async fn get_all(&self) -> AppResult<Vec<Car>> {
        self.store.get_all().await
    }

    async fn populate(&self, car: &Car) {
        let key = keys::car_by_id(car.id);
        if let Err(e) = self.cache.set_json(&key, car, self.ttl).await {
            warn!(car_id = %car.id, error = %e, "Failed to cache car");
        }
    }

    async fn evict(&self, id: CarId) {
        if let Err(e) = self.cache.delete(&keys::car_by_id(id)).await {
            warn!(car_id = %id, error = %e, "Failed to evict cached car");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use carlot_cache::memory::MemoryCacheProvider;
    use carlot_core::config::MemoryCacheConfig;
    use carlot_core::error::ErrorKind;
    use carlot_database::memory::MemoryCarStore;

    use super::*;

    /// Counts durable reads and can be told to fail writes.
    #[derive(Debug, Default)]
    struct CountingStore {
        inner: MemoryCarStore,
        reads: AtomicUsize,
        fail_writes: std::sync::atomic::AtomicBool,
    }

    impl CountingStore {
        fn reads(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }

        fn check_writable(&self) -> AppResult<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(AppError::store_unavailable(
                    "store offline",
                    std::io::Error::other("connection refused"),
                ));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CarStore for CountingStore {
        async fn create(&self, car: &Car) -> AppResult<()> {
            self.check_writable()?;
            self.inner.create(car).await
        }

        async fn get(&self, id: CarId) -> AppResult<Option<Car>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.get(id).await
        }

        async fn update(&self, car: &Car) -> AppResult<bool> {
            self.check_writable()?;
            self.inner.update(car).await
        }

        async fn delete(&self, id: CarId) -> AppResult<bool> {
            self.check_writable()?;
            self.inner.delete(id).await
        }

        async fn get_all(&self) -> AppResult<Vec<Car>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.get_all().await
        }
    }

    /// A cache whose every operation fails, or only whose reads fail.
    #[derive(Debug)]
    struct BrokenCache {
        reads_fail: bool,
        writes_fail: bool,
    }

    #[async_trait]
    impl CacheProvider for BrokenCache {
        async fn get(&self, _key: &str) -> AppResult<Option<String>> {
            if self.reads_fail {
                return Err(AppError::store_unavailable(
                    "cache offline",
                    std::io::Error::other("connection refused"),
                ));
            }
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> AppResult<()> {
            if self.writes_fail {
                return Err(AppError::store_unavailable(
                    "cache offline",
                    std::io::Error::other("connection refused"),
                ));
            }
            Ok(())
        }

        async fn set_default(&self, key: &str, value: &str) -> AppResult<()> {
            self.set(key, value, Duration::from_secs(1)).await
        }

        async fn delete(&self, key: &str) -> AppResult<()> {
            self.set(key, "", Duration::from_secs(1)).await
        }

        async fn health_check(&self) -> AppResult<bool> {
            Ok(!self.reads_fail)
        }
    }

    fn memory_cache() -> Arc<CacheManager> {
        Arc::new(CacheManager::from_provider(Arc::new(
            MemoryCacheProvider::new(&MemoryCacheConfig { max_capacity: 100 }, 60),
        )))
    }

    fn repo_with(
        store: Arc<CountingStore>,
        cache: Arc<CacheManager>,
    ) -> CachedCarRepository {
        CachedCarRepository::new(store, cache, Duration::from_secs(60))
    }

    fn toyota() -> Car {
        Car::new("Toyota", 2001, true)
    }

    #[tokio::test]
    async fn test_create_then_get_is_served_from_cache() {
        let store = Arc::new(CountingStore::default());
        let repo = repo_with(store.clone(), memory_cache());
        let car = toyota();

        repo.create(&car).await.unwrap();
        assert_eq!(repo.get(car.id).await.unwrap(), car);
        assert_eq!(repo.get(car.id).await.unwrap(), car);
        assert_eq!(store.reads(), 0);
    }

    #[tokio::test]
    async fn test_miss_reads_through_then_hits() {
        let store = Arc::new(CountingStore::default());
        let car = toyota();
        store.inner.create(&car).await.unwrap();
        let repo = repo_with(store.clone(), memory_cache());

        assert_eq!(repo.get(car.id).await.unwrap(), car);
        assert_eq!(store.reads(), 1);
        assert_eq!(repo.get(car.id).await.unwrap(), car);
        assert_eq!(store.reads(), 1);
    }

    #[tokio::test]
    async fn test_update_is_visible_immediately() {
        let repo = repo_with(Arc::new(CountingStore::default()), memory_cache());
        let car = toyota();
        repo.create(&car).await.unwrap();
        repo.get(car.id).await.unwrap();

        let honda = Car {
            brand: "Honda".to_string(),
            is_running: false,
            ..car.clone()
        };
        repo.update(&honda).await.unwrap();

        let got = repo.get(car.id).await.unwrap();
        assert_eq!(got.brand, "Honda");
        assert!(!got.is_running);
    }

    #[tokio::test]
    async fn test_failed_update_leaves_cache_cold_and_store_old() {
        let store = Arc::new(CountingStore::default());
        let cache = memory_cache();
        let repo = repo_with(store.clone(), cache.clone());
        let car = toyota();
        repo.create(&car).await.unwrap();

        store.fail_writes.store(true, Ordering::SeqCst);
        let changed = Car {
            brand: "Honda".to_string(),
            ..car.clone()
        };
        let err = repo.update(&changed).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::StoreUnavailable);

        assert!(cache.get(&keys::car_by_id(car.id)).await.unwrap().is_none());
        assert_eq!(repo.get(car.id).await.unwrap().brand, "Toyota");
        assert_eq!(store.reads(), 1);
    }

    #[tokio::test]
    async fn test_update_of_missing_car_is_not_found() {
        let repo = repo_with(Arc::new(CountingStore::default()), memory_cache());
        let err = repo.update(&toyota()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let repo = repo_with(Arc::new(CountingStore::default()), memory_cache());
        let car = toyota();
        repo.create(&car).await.unwrap();
        repo.get(car.id).await.unwrap();

        repo.delete(car.id).await.unwrap();
        let err = repo.get(car.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        let err = repo.delete(car.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_failed_create_leaves_no_cache_entry() {
        let store = Arc::new(CountingStore::default());
        store.fail_writes.store(true, Ordering::SeqCst);
        let cache = memory_cache();
        let repo = repo_with(store, cache.clone());
        let car = toyota();

        assert!(repo.create(&car).await.is_err());
        assert!(cache.get(&keys::car_by_id(car.id)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_cache_entry() {
        let store = Arc::new(CountingStore::default());
        let cache = memory_cache();
        let repo = repo_with(store.clone(), cache.clone());
        let car = toyota();
        repo.create(&car).await.unwrap();

        store.fail_writes.store(true, Ordering::SeqCst);
        assert!(repo.delete(car.id).await.is_err());
        assert!(cache.get(&keys::car_by_id(car.id)).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_cache_write_failures_are_swallowed() {
        let cache = Arc::new(CacheManager::from_provider(Arc::new(BrokenCache {
            reads_fail: false,
            writes_fail: true,
        })));
        let repo = repo_with(Arc::new(CountingStore::default()), cache);
        let car = toyota();

        repo.create(&car).await.unwrap();
        assert_eq!(repo.get(car.id).await.unwrap(), car);
        repo.update(&car).await.unwrap();
        repo.delete(car.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_cache_read_failure_fails_get() {
        let store = Arc::new(CountingStore::default());
        let car = toyota();
        store.inner.create(&car).await.unwrap();
        let cache = Arc::new(CacheManager::from_provider(Arc::new(BrokenCache {
            reads_fail: true,
            writes_fail: false,
        })));
        let repo = repo_with(store.clone(), cache);

        let err = repo.get(car.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::StoreUnavailable);
        assert_eq!(store.reads(), 0);
    }

    #[tokio::test]
    async fn test_corrupt_cache_entry_fails_get() {
        let cache = memory_cache();
        let repo = repo_with(Arc::new(CountingStore::default()), cache.clone());
        let id = CarId::new();
        cache
            .set_default(&keys::car_by_id(id), "{not json")
            .await
            .unwrap();

        let err = repo.get(id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Serialization);
    }

    #[tokio::test]
    async fn test_get_all_bypasses_cache() {
        let store = Arc::new(CountingStore::default());
        let repo = repo_with(store.clone(), memory_cache());
        repo.create(&toyota()).await.unwrap();

        assert_eq!(repo.get_all().await.unwrap().len(), 1);
        assert_eq!(store.reads(), 1);
    }
}
