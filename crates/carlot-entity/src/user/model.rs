//! User entity model.

use carlot_core::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An authenticable subject.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: UserId,
    /// Unique login name.
    pub login: String,
    /// Argon2 PHC string of the password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub admin: bool,
    /// Slow hash of SHA-256(current refresh token). `None` until the first
    /// token pair is issued.
    #[serde(skip_serializing)]
    pub refresh_token_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a fresh subject with no refresh token recorded yet.
    pub fn new(login: impl Into<String>, password_hash: String, admin: bool) -> Self {
        Self {
            id: UserId::new(),
            login: login.into(),
            password_hash,
            admin,
            refresh_token_hash: None,
            created_at: Utc::now(),
        }
    }
}
