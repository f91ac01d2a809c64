//! Redis connection management.

use redis::Client;
use redis::aio::ConnectionManager;
use tracing::info;

use carlot_core::config::RedisCacheConfig;
use carlot_core::error::AppError;
use carlot_core::result::AppResult;

/// Redis client wrapper with a reconnecting connection manager.
#[derive(Clone)]
pub struct RedisClient {
    conn: ConnectionManager,
    key_prefix: String,
}

impl std::fmt::Debug for RedisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisClient")
            .field("key_prefix", &self.key_prefix)
            .finish_non_exhaustive()
    }
}

impl RedisClient {
    pub async fn connect(config: &RedisCacheConfig) -> AppResult<Self> {
        info!(url = %mask_redis_url(&config.url), "Connecting to Redis");

        let client = Client::open(config.url.as_str())
            .map_err(|e| AppError::store_unavailable("Failed to create Redis client", e))?;

        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| AppError::store_unavailable("Failed to connect to Redis", e))?;

        info!("Connected to Redis");
        Ok(Self {
            conn,
            key_prefix: config.key_prefix.clone(),
        })
    }

    /// A cheap clone of the connection manager for issuing commands.
    pub fn conn_mut(&self) -> ConnectionManager {
        self.conn.clone()
    }

    /// Build a full key with the configured prefix.
    pub fn prefixed_key(&self, key: &str) -> String {
        format!("{}{key}", self.key_prefix)
    }
}

/// Mask password in Redis URL for safe logging.
fn mask_redis_url(url: &str) -> String {
    if let Some(at_pos) = url.rfind('@') {
        let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
        let credentials = &url[scheme_end..at_pos];
        return match credentials.rfind(':') {
            Some(colon) => format!(
                "{}{}:****@{}",
                &url[..scheme_end],
                &credentials[..colon],
                &url[at_pos + 1..]
            ),
            None => format!("{}****@{}", &url[..scheme_end], &url[at_pos + 1..]),
        };
    }
    url.to_string()
}
