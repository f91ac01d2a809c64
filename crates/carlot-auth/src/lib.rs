//! # carlot-auth
//!
//! The identity side of Carlot:
//!
//! - [`password`]: Argon2id hashing and the SHA-256 refresh digest
//! - [`jwt`]: access/refresh token signing and parsing with distinct secrets
//! - [`session`]: signup, login, and one-time-use refresh rotation
//! - [`gate`]: per-operation authorization policy

pub mod gate;
pub mod jwt;
pub mod password;
pub mod session;

pub use gate::{Access, AuthorizationGate, Operation};
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenCodec, TokenPair, TokenType};
pub use password::PasswordHasher;
pub use session::SessionService;

#[cfg(test)]
pub(crate) mod test_support;
