//! # carlot-service
//!
//! Inventory use cases. Services follow constructor injection: every
//! dependency arrives as an `Arc` at construction time.

pub mod car;

pub use car::CachedCarRepository;
