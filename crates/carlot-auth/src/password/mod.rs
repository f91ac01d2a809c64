//! Credential hashing.

pub mod digest;
pub mod hasher;

pub use digest::refresh_digest;
pub use hasher::PasswordHasher;
