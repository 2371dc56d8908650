//! User repository trait defining the interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while maintaining
/// the abstraction boundary between domain and infrastructure layers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new account
    ///
    /// # Returns
    /// * `Ok(User)` - The saved account
    /// * `Err(DomainError)` - Save failed (e.g., duplicate email)
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find an account by email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - Account found
    /// * `Ok(None)` - No account with the given email
    /// * `Err(DomainError)` - Persistence error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;
}
