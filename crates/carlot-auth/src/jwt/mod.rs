//! Bearer token signing and parsing.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{Claims, TokenType};
pub use decoder::JwtDecoder;
pub use encoder::{JwtEncoder, TokenPair};

use carlot_core::config::AuthConfig;

/// Encoder and decoder built from the same pair of secrets.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    pub encoder: JwtEncoder,
    pub decoder: JwtDecoder,
}

impl TokenCodec {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
        }
    }
}
