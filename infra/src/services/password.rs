//! Bcrypt implementation of the PasswordHasher trait.
//!
//! The stored configuration is the cost factor alone; bcrypt generates a
//! fresh random salt on every hash call and embeds it in the output string,
//! so equal passwords never share a hash.

use rp_core::errors::DomainError;
use rp_core::services::PasswordHasher;

/// Bcrypt-backed password hasher
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    /// Work factor; hashing time doubles with each increment
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with an explicit cost factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Create a hasher reading `BCRYPT_COST` from the environment
    pub fn from_env() -> Self {
        let cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(bcrypt::DEFAULT_COST);

        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        bcrypt::hash(password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        })
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
            message: format!("Failed to verify password: {}", e),
        })
    }
}
