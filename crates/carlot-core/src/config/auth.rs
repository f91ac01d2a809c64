//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Token signing and credential hashing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC-SHA256 secret for access tokens.
    pub access_token_secret: String,
    /// HMAC-SHA256 secret for refresh tokens. Must differ from the access secret.
    pub refresh_token_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in hours.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_hours: u64,
    /// Clock skew tolerated when checking `exp`, in seconds.
    #[serde(default)]
    pub leeway_seconds: u64,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_hash_memory")]
    pub hash_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,
    /// Argon2 lane count.
    #[serde(default = "default_hash_parallelism")]
    pub hash_parallelism: u32,
}

impl AuthConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.access_token_secret.is_empty() || self.refresh_token_secret.is_empty() {
            return Err(AppError::configuration(
                "auth.access_token_secret and auth.refresh_token_secret must be set",
            ));
        }
        if self.access_token_secret == self.refresh_token_secret {
            return Err(AppError::configuration(
                "access and refresh token secrets must be distinct",
            ));
        }
        if self.access_ttl_minutes == 0 || self.refresh_ttl_hours == 0 {
            return Err(AppError::configuration("token TTLs must be greater than zero"));
        }
        Ok(())
    }
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    72
}

fn default_hash_memory() -> u32 {
    19 * 1024
}

fn default_hash_iterations() -> u32 {
    2
}

fn default_hash_parallelism() -> u32 {
    1
}
