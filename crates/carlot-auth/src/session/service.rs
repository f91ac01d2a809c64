//! Signup, login, and refresh flows.
//!
//! Each subject has exactly one refresh slot holding
//! `argon2(sha256(refresh_token))`. Login and signup overwrite the slot,
//! revoking whatever was issued before. Refresh consumes the presented
//! token and rotates the slot with a compare-and-swap, so two concurrent
//! refreshes of the same token cannot both succeed.

use std::sync::Arc;

use tracing::{info, warn};

use carlot_core::error::{AppError, ErrorKind};
use carlot_core::result::AppResult;
use carlot_core::types::UserId;
use carlot_database::store::UserStore;
use carlot_entity::user::User;

use crate::jwt::{Claims, JwtDecoder, JwtEncoder, TokenCodec, TokenPair};
use crate::password::{PasswordHasher, refresh_digest};

#[derive(Clone)]
pub struct SessionService {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    hasher: PasswordHasher,
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("users", &self.users)
            .finish_non_exhaustive()
    }
}

impl SessionService {
    pub fn new(codec: TokenCodec, hasher: PasswordHasher, users: Arc<dyn UserStore>) -> Self {
        Self {
            encoder: codec.encoder,
            decoder: codec.decoder,
            hasher,
            users,
        }
    }

    /// Create a subject and issue its first token pair.
    ///
    /// Fails with `LoginTaken` if the login exists. Exactly one user row
    /// and one refresh-slot write happen on success.
    pub async fn sign_up(&self, login: &str, password: &str, admin: bool) -> AppResult<TokenPair> {
        let password_hash = self.hasher.hash(password)?;
        let user = User::new(login, password_hash, admin);

        self.users.create_user(&user).await?;

        let tokens = self.issue(user.id, user.admin).await?;
        info!(user_id = %user.id, admin, "Subject signed up");
        Ok(tokens)
    }

    /// Authenticate and issue a fresh pair, revoking any earlier refresh token.
    pub async fn login(&self, login: &str, password: &str) -> AppResult<TokenPair> {
        let Some(user) = self.users.find_by_login(login).await? else {
            warn!(login, "Login failed: unknown login");
            return Err(AppError::invalid_credentials());
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::invalid_credentials());
        }

        let tokens = self.issue(user.id, user.admin).await?;
        info!(user_id = %user.id, "Subject logged in");
        Ok(tokens)
    }

    /// Exchange a matching access/refresh pair for a new one.
    ///
    /// The presented refresh token is consumed: a second use fails with
    /// `RefreshTokenRevoked`, as does any token superseded by a later login.
    pub async fn refresh(&self, access_token: &str, refresh_token: &str) -> AppResult<TokenPair> {
        let access = self.decoder.decode_access(access_token)?;
        let refresh = self.decoder.decode_refresh(refresh_token)?;

        if !access.same_identity(&refresh) {
            warn!(
                access_sub = %access.sub,
                refresh_sub = %refresh.sub,
                "Refresh rejected: token claims differ"
            );
            return Err(AppError::claim_mismatch(
                "Access and refresh tokens were not issued together",
            ));
        }

        let user_id = refresh.user_id();
        let stored = self.stored_refresh_hash(user_id).await?;

        if !self.hasher.verify(refresh_digest(refresh_token), &stored)? {
            warn!(user_id = %user_id, "Refresh rejected: token superseded or reused");
            return Err(AppError::refresh_token_revoked(
                "Refresh token is no longer valid",
            ));
        }

        let tokens = self.encoder.generate_token_pair(user_id, refresh.admin)?;
        let new_hash = self.hasher.hash(refresh_digest(&tokens.refresh_token))?;

        if !self
            .users
            .swap_refresh_hash(user_id, &stored, &new_hash)
            .await?
        {
            warn!(user_id = %user_id, "Refresh rejected: lost rotation race");
            return Err(AppError::refresh_token_revoked(
                "Refresh token is no longer valid",
            ));
        }

        info!(user_id = %user_id, "Token pair rotated");
        Ok(tokens)
    }

    /// Decode an access token. Used by the authorization gate.
    pub fn decode_access(&self, token: &str) -> AppResult<Claims> {
        self.decoder.decode_access(token)
    }

    async fn stored_refresh_hash(&self, user_id: UserId) -> AppResult<String> {
        let stored = match self.users.get_refresh_hash(user_id).await {
            Ok(stored) => stored,
            Err(e) if e.kind == ErrorKind::NotFound => None,
            Err(e) => return Err(e),
        };
        stored.ok_or_else(|| AppError::refresh_token_revoked("No active session for subject"))
    }

    /// Mint a pair and unconditionally overwrite the subject's refresh slot.
    async fn issue(&self, user_id: UserId, admin: bool) -> AppResult<TokenPair> {
        let tokens = self.encoder.generate_token_pair(user_id, admin)?;
        let hash = self.hasher.hash(refresh_digest(&tokens.refresh_token))?;
        self.users.set_refresh_hash(user_id, &hash).await?;
        Ok(tokens)
    }
}
