//! Custom Axum extractors.

pub mod auth;
pub mod path;

pub use auth::{AdminUser, AuthUser};
pub use path::parse_car_id;
