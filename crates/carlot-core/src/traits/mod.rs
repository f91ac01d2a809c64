//! Core traits defined in `carlot-core` and implemented by other crates.

pub mod cache;

pub use cache::CacheProvider;
