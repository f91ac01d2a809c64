//! Request handlers.

pub mod auth;
pub mod car;
pub mod health;
pub mod rpc;
