//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Duration;

use carlot_auth::{AuthorizationGate, PasswordHasher, SessionService, TokenCodec};
use carlot_cache::CacheManager;
use carlot_core::config::AppConfig;
use carlot_core::result::AppResult;
use carlot_database::Stores;
use carlot_service::CachedCarRepository;

/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    pub stores: Stores,
    pub cache: Arc<CacheManager>,

    // ── Core ─────────────────────────────────────────────────
    pub sessions: Arc<SessionService>,
    pub gate: Arc<AuthorizationGate>,
    pub cars: Arc<CachedCarRepository>,
}

impl AppState {
    /// Connect the configured store and cache, then wire the core.
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let stores = Stores::connect(&config.database).await?;
        let cache = Arc::new(CacheManager::new(&config.cache).await?);
        Self::new(config, stores, cache)
    }

    /// Wire the core over already-connected backends.
    pub fn new(config: AppConfig, stores: Stores, cache: Arc<CacheManager>) -> AppResult<Self> {
        let codec = TokenCodec::new(&config.auth);
        let gate = Arc::new(AuthorizationGate::new(codec.decoder.clone()));
        let hasher = PasswordHasher::new(&config.auth)?;
        let sessions = Arc::new(SessionService::new(codec, hasher, stores.users.clone()));

        let cars = Arc::new(CachedCarRepository::new(
            stores.cars.clone(),
            Arc::clone(&cache),
            Duration::from_secs(config.cache.default_ttl_seconds),
        ));

        Ok(Self {
            config: Arc::new(config),
            stores,
            cache,
            sessions,
            gate,
            cars,
        })
    }
}
