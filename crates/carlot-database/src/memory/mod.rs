//! Process-local store implementations backed by `dashmap`.
//!
//! Used for tests and single-process development runs. Each operation
//! holds at most one shard lock, so per-key atomicity matches what the
//! relational backend gives per row.

pub mod car;
pub mod user;

pub use car::MemoryCarStore;
pub use user::MemoryUserStore;
