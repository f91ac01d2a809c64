use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use carlot_core::error::AppError;
use carlot_core::result::AppResult;
use carlot_core::types::UserId;
use carlot_entity::user::User;

use crate::store::UserStore;

/// Subjects keyed by id with a secondary login index.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: DashMap<UserId, User>,
    logins: DashMap<String, UserId>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn missing(id: UserId) -> AppError {
        AppError::not_found(format!("User {id} not found"))
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, user: &User) -> AppResult<()> {
        // The login shard stays locked until the user row is in place.
        match self.logins.entry(user.login.clone()) {
            Entry::Occupied(_) => Err(AppError::login_taken(format!(
                "Login '{}' is already taken",
                user.login
            ))),
            Entry::Vacant(slot) => {
                self.users.insert(user.id, user.clone());
                slot.insert(user.id);
                Ok(())
            }
        }
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        let Some(id) = self.logins.get(login).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_refresh_hash(&self, id: UserId) -> AppResult<Option<String>> {
        self.users
            .get(&id)
            .map(|entry| entry.refresh_token_hash.clone())
            .ok_or_else(|| Self::missing(id))
    }

    async fn set_refresh_hash(&self, id: UserId, hash: &str) -> AppResult<()> {
        let mut user = self.users.get_mut(&id).ok_or_else(|| Self::missing(id))?;
        user.refresh_token_hash = Some(hash.to_string());
        Ok(())
    }

    async fn swap_refresh_hash(&self, id: UserId, expected: &str, new: &str) -> AppResult<bool> {
        let mut user = self.users.get_mut(&id).ok_or_else(|| Self::missing(id))?;
        if user.refresh_token_hash.as_deref() != Some(expected) {
            return Ok(false);
        }
        user.refresh_token_hash = Some(new.to_string());
        Ok(true)
    }
}
