//! Password hashing seam.

use crate::errors::DomainError;

/// Adaptive one-way password hashing
///
/// Implementations must use a per-call random salt; any configured value is
/// a cost/work factor only, never a literal salt shared across users.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage
    fn hash(&self, plaintext: &str) -> Result<String, DomainError>;

    /// Check a plaintext password against a stored hash
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, DomainError>;
}
