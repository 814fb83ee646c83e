//! Password hashing and verification using Argon2

use crate::config::Argon2Config;
use crate::utils::error::{Result, VaultError};
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// Password hasher with configured cost parameters.
///
/// The cost is intentionally expensive; it is bounded by configuration, not
/// optimized away.
#[derive(Clone)]
pub struct Hasher {
    argon2: Argon2<'static>,
}

impl Hasher {
    /// Build a hasher from configured cost parameters
    pub fn new(config: &Argon2Config) -> Result<Self> {
        config.validate()?;
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| VaultError::Config(format!("invalid argon2 parameters: {}", e)))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a password. The salt is randomized per call, so hashing the same
    /// input twice produces different digests.
    pub fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let digest = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| VaultError::Crypto(format!("failed to hash password: {}", e)))?;
        Ok(digest.to_string())
    }

    /// Verify a password against a stored digest.
    ///
    /// A malformed or corrupt digest verifies as `false`; it must never
    /// surface as an error that a login path could mistake for success.
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        let parsed = match PasswordHash::new(digest) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!("rejecting malformed password digest: {}", e);
                return false;
            }
        };

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => true,
            Err(argon2::password_hash::Error::Password) => false,
            Err(e) => {
                tracing::debug!("password verification failed: {}", e);
                false
            }
        }
    }
}
