//! Argon2id hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use carlot_core::config::AuthConfig;
use carlot_core::error::AppError;

/// Salted one-way hashing with a work factor fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Build a hasher from the configured Argon2 cost parameters.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let params = Params::new(
            config.hash_memory_kib,
            config.hash_iterations,
            config.hash_parallelism,
            None,
        )
        .map_err(|e| AppError::configuration(format!("Invalid Argon2 parameters: {e}")))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a secret with a random salt. Returns a PHC string.
    pub fn hash(&self, secret: impl AsRef<[u8]>) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(secret.as_ref(), &salt)
            .map_err(|e| AppError::internal(format!("Hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verify a secret against a stored PHC string.
    ///
    /// Returns `Ok(false)` on mismatch. The cost parameters embedded in
    /// `hash` are used, so hashes made under an older cost still verify.
    pub fn verify(&self, secret: impl AsRef<[u8]>, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid hash format: {e}")))?;

        match self.argon2().verify_password(secret.as_ref(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!("Hash verification failed: {e}"))),
        }
    }
}
