//! Car inventory.

pub mod cached;

pub use cached::CachedCarRepository;
