//! Capability traits for the durable store.
//!
//! Services depend only on these traits, never on a concrete backend.
//! "Not found" is always reported distinctly from transport failures:
//! either as `Ok(None)`/`Ok(false)` or as [`ErrorKind::NotFound`].
//!
//! [`ErrorKind::NotFound`]: carlot_core::ErrorKind::NotFound

use async_trait::async_trait;

use carlot_core::result::AppResult;
use carlot_core::types::{CarId, UserId};
use carlot_entity::car::Car;
use carlot_entity::user::User;

/// Inventory CRUD.
#[async_trait]
pub trait CarStore: Send + Sync + std::fmt::Debug + 'static {
    async fn create(&self, car: &Car) -> AppResult<()>;

    async fn get(&self, id: CarId) -> AppResult<Option<Car>>;

    /// Returns `false` when no row has `car.id`.
    async fn update(&self, car: &Car) -> AppResult<bool>;

    /// Returns `false` when no row has `id`.
    async fn delete(&self, id: CarId) -> AppResult<bool>;

    async fn get_all(&self) -> AppResult<Vec<Car>>;
}

/// Subject persistence and the single refresh-token slot per subject.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new subject. Fails with `LoginTaken` if the login exists.
    async fn create_user(&self, user: &User) -> AppResult<()>;

    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>>;

    /// Stored refresh hash. `NotFound` if the subject does not exist.
    async fn get_refresh_hash(&self, id: UserId) -> AppResult<Option<String>>;

    /// Unconditionally overwrite the refresh slot.
    async fn set_refresh_hash(&self, id: UserId, hash: &str) -> AppResult<()>;

    /// Overwrite the refresh slot only if it still holds `expected`.
    ///
    /// Returns `false` when another writer replaced the hash first.
    async fn swap_refresh_hash(&self, id: UserId, expected: &str, new: &str) -> AppResult<bool>;
}
