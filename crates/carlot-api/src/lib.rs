//! # carlot-api
//!
//! Transport bindings for Carlot built on Axum.
//!
//! Two bindings share one [`AppState`]: REST routes under `/api` and a
//! method-dispatch RPC endpoint at `/rpc`. Both run every request through
//! the same authorization gate before touching the session service or the
//! car repository.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
