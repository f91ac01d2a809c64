//! PostgreSQL implementations of the store traits.

pub mod car;
pub mod user;

pub use car::CarRepository;
pub use user::UserRepository;

use carlot_core::error::AppError;

/// Map a driver failure to the store-unavailable kind.
pub(crate) fn unavailable(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::store_unavailable(message, e)
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}
