//! RS256 key management for JWT signing and verification

use std::fs;
use std::path::{Path, PathBuf};

use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::errors::{DomainError, TokenError};

/// Manager for the RS256 key pair used in JWT operations
#[derive(Clone)]
pub struct Rs256KeyManager {
    /// Private key for signing JWTs
    encoding_key: EncodingKey,
    /// Public key for verifying JWTs
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for Rs256KeyManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rs256KeyManager").finish_non_exhaustive()
    }
}

impl Rs256KeyManager {
    /// Creates a new RS256 key manager from key file paths
    ///
    /// # Arguments
    ///
    /// * `private_key_path` - Path to the PEM-encoded private key file
    /// * `public_key_path` - Path to the PEM-encoded public key file
    ///
    /// # Returns
    ///
    /// * `Ok(Rs256KeyManager)` - Key manager initialized successfully
    /// * `Err(DomainError)` - Failed to load keys
    pub fn new<P: AsRef<Path>>(
        private_key_path: P,
        public_key_path: P,
    ) -> Result<Self, DomainError> {
        let private_key_pem = read_key_file(private_key_path.as_ref())?;
        let public_key_pem = read_key_file(public_key_path.as_ref())?;

        Self::from_pem_strings(
            std::str::from_utf8(&private_key_pem).map_err(|_| key_error("private key is not UTF-8"))?,
            std::str::from_utf8(&public_key_pem).map_err(|_| key_error("public key is not UTF-8"))?,
        )
    }

    /// Creates a key manager from environment variables
    ///
    /// Reads `JWT_PRIVATE_KEY_PATH` and `JWT_PUBLIC_KEY_PATH`, falling back
    /// to the conventional `keys/` locations.
    pub fn from_env() -> Result<Self, DomainError> {
        let private_key_path = std::env::var("JWT_PRIVATE_KEY_PATH")
            .unwrap_or_else(|_| "keys/jwt_private_key.pem".to_string());
        let public_key_path = std::env::var("JWT_PUBLIC_KEY_PATH")
            .unwrap_or_else(|_| "keys/jwt_public_key.pem".to_string());

        Self::new(PathBuf::from(private_key_path), PathBuf::from(public_key_path))
    }

    /// Creates a key manager from PEM strings (useful for tests or embedded keys)
    pub fn from_pem_strings(
        private_key_pem: &str,
        public_key_pem: &str,
    ) -> Result<Self, DomainError> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
            .map_err(|e| key_error(format!("Invalid private key format: {}", e)))?;

        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
            .map_err(|e| key_error(format!("Invalid public key format: {}", e)))?;

        Ok(Self {
            encoding_key,
            decoding_key,
        })
    }

    /// Returns the signing key
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Returns the verification key
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

fn read_key_file(path: &Path) -> Result<Vec<u8>, DomainError> {
    fs::read(path).map_err(|e| key_error(format!("Failed to read {}: {}", path.display(), e)))
}

fn key_error(message: impl Into<String>) -> DomainError {
    DomainError::Token(TokenError::KeyLoadError {
        message: message.into(),
    })
}
