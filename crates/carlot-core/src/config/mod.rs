//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate and overlaid with `CARLOT__SECTION__KEY` environment
//! variables.

pub mod app;
pub mod auth;
pub mod cache;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::cache::{CacheBackend, CacheConfig, MemoryCacheConfig, RedisCacheConfig};
pub use self::database::{DatabaseConfig, StoreBackend};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Durable store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Cache provider settings.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Token and password hashing settings.
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Merges `config/default.toml` (if present), the optional explicit
    /// file, and environment variables prefixed with `CARLOT__`.
    pub fn load(path: Option<&str>) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("CARLOT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document without consulting files or the environment.
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot run safely.
    pub fn validate(&self) -> Result<(), AppError> {
        self.auth.validate()?;

        if self.database.backend == StoreBackend::Postgres && self.database.url.trim().is_empty() {
            return Err(AppError::configuration(
                "database.url is required for the postgres backend",
            ));
        }

        if self.cache.default_ttl_seconds == 0 {
            return Err(AppError::configuration(
                "cache.default_ttl_seconds must be greater than zero",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("config should deserialize")
    }

    #[test]
    fn test_from_toml_str_validates() {
        let err = AppConfig::from_toml_str(
            r#"
            [auth]
            access_token_secret = "access"
            refresh_token_secret = "refresh"
            "#,
        )
        .unwrap_err();
        assert_eq!(err.kind, crate::ErrorKind::Configuration);
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let cfg = from_toml(
            r#"
            [auth]
            access_token_secret = "access"
            refresh_token_secret = "refresh"
            "#,
        );
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.auth.access_ttl_minutes, 15);
        assert_eq!(cfg.auth.refresh_ttl_hours, 72);
        assert_eq!(cfg.cache.backend, CacheBackend::Memory);
        assert_eq!(cfg.database.backend, StoreBackend::Postgres);
    }

    #[test]
    fn test_postgres_requires_url() {
        let cfg = from_toml(
            r#"
            [auth]
            access_token_secret = "access"
            refresh_token_secret = "refresh"
            "#,
        );
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_memory_backend_needs_no_url() {
        let cfg = from_toml(
            r#"
            [database]
            backend = "memory"

            [auth]
            access_token_secret = "access"
            refresh_token_secret = "refresh"
            "#,
        );
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_identical_secrets_rejected() {
        let cfg = from_toml(
            r#"
            [database]
            backend = "memory"

            [auth]
            access_token_secret = "same"
            refresh_token_secret = "same"
            "#,
        );
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.kind, crate::ErrorKind::Configuration);
    }
}
