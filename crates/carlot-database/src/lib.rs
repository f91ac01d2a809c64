//! # carlot-database
//!
//! The durable store contracts consumed by the cache-aside repository and
//! the session service, plus two interchangeable implementations:
//! PostgreSQL (sqlx) and a process-local map store.

pub mod connection;
pub mod factory;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use factory::Stores;
pub use store::{CarStore, UserStore};
