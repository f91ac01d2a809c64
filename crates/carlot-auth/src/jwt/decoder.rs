//! JWT token validation.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use carlot_core::config::AuthConfig;
use carlot_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Verifies signatures and expiry. Access and refresh tokens are checked
/// against their own secrets.
#[derive(Clone)]
pub struct JwtDecoder {
    access_key: DecodingKey,
    refresh_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl JwtDecoder {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;

        Self {
            access_key: DecodingKey::from_secret(config.access_token_secret.as_bytes()),
            refresh_key: DecodingKey::from_secret(config.refresh_token_secret.as_bytes()),
            validation,
        }
    }

    pub fn decode_access(&self, token: &str) -> Result<Claims, AppError> {
        self.decode_as(token, TokenType::Access)
    }

    pub fn decode_refresh(&self, token: &str) -> Result<Claims, AppError> {
        self.decode_as(token, TokenType::Refresh)
    }

    /// Expiry maps to `TokenExpired`; every other failure to `TokenInvalid`.
    fn decode_as(&self, token: &str, expected: TokenType) -> Result<Claims, AppError> {
        let key = match expected {
            TokenType::Access => &self.access_key,
            TokenType::Refresh => &self.refresh_key,
        };

        let claims = decode::<Claims>(token, key, &self.validation)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => AppError::token_expired("Token has expired"),
                JwtErrorKind::InvalidSignature => AppError::token_invalid("Invalid token signature"),
                _ => AppError::token_invalid(format!("Token validation failed: {e}")),
            })?
            .claims;

        if claims.token_type != expected {
            return Err(AppError::token_invalid(format!(
                "Invalid token type: expected {expected:?} token"
            )));
        }

        Ok(claims)
    }
}
