//! # carlot-entity
//!
//! Domain entity models for Carlot. Each struct is a database row and
//! derives `sqlx::FromRow` alongside serde.

pub mod car;
pub mod user;
