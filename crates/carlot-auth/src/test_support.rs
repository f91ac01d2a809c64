use std::sync::Arc;

use carlot_core::config::AuthConfig;
use carlot_database::memory::MemoryUserStore;

use crate::jwt::TokenCodec;
use crate::password::PasswordHasher;
use crate::session::SessionService;

/// Auth settings with a cheap hashing cost.
pub(crate) fn test_auth_config() -> AuthConfig {
    AuthConfig {
        access_token_secret: "access-secret-for-tests".to_string(),
        refresh_token_secret: "refresh-secret-for-tests".to_string(),
        access_ttl_minutes: 15,
        refresh_ttl_hours: 72,
        leeway_seconds: 0,
        hash_memory_kib: 1024,
        hash_iterations: 1,
        hash_parallelism: 1,
    }
}

/// A session service over a fresh in-memory user store.
pub(crate) fn session_service() -> (SessionService, Arc<MemoryUserStore>) {
    let config = test_auth_config();
    let store = Arc::new(MemoryUserStore::new());
    let service = SessionService::new(
        TokenCodec::new(&config),
        PasswordHasher::new(&config).expect("test hash params are valid"),
        store.clone(),
    );
    (service, store)
}
