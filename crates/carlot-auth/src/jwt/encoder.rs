//! JWT token creation with per-kind signing keys.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use carlot_core::config::AuthConfig;
use carlot_core::error::AppError;
use carlot_core::types::UserId;

use super::claims::{Claims, TokenType};

/// Signs access and refresh tokens. Each kind uses its own HMAC secret so
/// one can never be replayed as the other.
#[derive(Clone)]
pub struct JwtEncoder {
    access_key: EncodingKey,
    refresh_key: EncodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}

/// Result of a successful token pair generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub access_expires_at: DateTime<Utc>,
    pub refresh_expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            access_key: EncodingKey::from_secret(config.access_token_secret.as_bytes()),
            refresh_key: EncodingKey::from_secret(config.refresh_token_secret.as_bytes()),
            access_ttl: Duration::minutes(config.access_ttl_minutes as i64),
            refresh_ttl: Duration::hours(config.refresh_ttl_hours as i64),
        }
    }

    /// Mint a fresh access + refresh pair for a subject.
    pub fn generate_token_pair(&self, user_id: UserId, admin: bool) -> Result<TokenPair, AppError> {
        let now = Utc::now();
        let access_expires_at = now + self.access_ttl;
        let refresh_expires_at = now + self.refresh_ttl;

        let access_claims = Claims::new(user_id, admin, TokenType::Access, access_expires_at);
        let refresh_claims = Claims::new(user_id, admin, TokenType::Refresh, refresh_expires_at);

        Ok(TokenPair {
            access_token: self.sign(&access_claims)?,
            refresh_token: self.sign(&refresh_claims)?,
            access_expires_at,
            refresh_expires_at,
        })
    }

    /// Sign arbitrary claims with the key matching their token type.
    pub fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        let key = match claims.token_type {
            TokenType::Access => &self.access_key,
            TokenType::Refresh => &self.refresh_key,
        };
        encode(&Header::default(), claims, key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}
