//! JWT claims structure used in access and refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use carlot_core::types::UserId;

/// Claims carried by both token kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject id.
    pub sub: UserId,
    /// Role at issuance time.
    pub admin: bool,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Random per token, so two tokens minted in the same second differ.
    pub jti: Uuid,
    #[serde(rename = "typ")]
    pub token_type: TokenType,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived, authorizes individual requests.
    Access,
    /// Long-lived, single-use, exchanged for a new pair.
    Refresh,
}

impl Claims {
    pub fn new(sub: UserId, admin: bool, token_type: TokenType, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub,
            admin,
            iat: Utc::now().timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
            token_type,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.sub
    }

    /// Whether both tokens came from the same subject with the same role.
    pub fn same_identity(&self, other: &Claims) -> bool {
        self.sub == other.sub && self.admin == other.admin
    }
}
