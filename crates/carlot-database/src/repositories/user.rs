//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use carlot_core::error::AppError;
use carlot_core::result::AppResult;
use carlot_core::types::UserId;
use carlot_entity::user::User;

use super::{is_unique_violation, unavailable};
use crate::store::UserStore;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create_user(&self, user: &User) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO users (id, login, password_hash, admin, refresh_token_hash, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(user.id)
        .bind(&user.login)
        .bind(&user.password_hash)
        .bind(user.admin)
        .bind(&user.refresh_token_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::login_taken(format!("Login '{}' is already taken", user.login))
            } else {
                AppError::store_unavailable("Failed to create user", e)
            }
        })?;
        Ok(())
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE login = $1")
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .map_err(unavailable("Failed to find user by login"))
    }

    async fn get_refresh_hash(&self, id: UserId) -> AppResult<Option<String>> {
        let row: Option<Option<String>> =
            sqlx::query_scalar("SELECT refresh_token_hash FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(unavailable("Failed to read refresh token hash"))?;

        row.ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    async fn set_refresh_hash(&self, id: UserId, hash: &str) -> AppResult<()> {
        let result = sqlx::query("UPDATE users SET refresh_token_hash = $1 WHERE id = $2")
            .bind(hash)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(unavailable("Failed to store refresh token hash"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {id} not found")));
        }
        Ok(())
    }

    async fn swap_refresh_hash(&self, id: UserId, expected: &str, new: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE users SET refresh_token_hash = $1 WHERE id = $2 AND refresh_token_hash = $3",
        )
        .bind(new)
        .bind(id)
        .bind(expected)
        .execute(&self.pool)
        .await
        .map_err(unavailable("Failed to rotate refresh token hash"))?;
        Ok(result.rows_affected() == 1)
    }
}
