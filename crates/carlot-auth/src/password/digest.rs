//! Fast digest applied to refresh tokens before slow hashing.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of a refresh token.
///
/// The digest, not the token, is what gets slow-hashed and stored, so the
/// stored value never depends on the token's length.
pub fn refresh_digest(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
