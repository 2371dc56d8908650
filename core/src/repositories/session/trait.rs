//! Session repository trait defining the interface for refresh-token session persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::session::Session;
use crate::errors::DomainError;

/// Repository trait for Session entity persistence operations
///
/// This is the only component permitted to read or write session records.
/// Every operation is a single atomic persistence action on one record;
/// all cross-record decision making lives in the authentication service.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Replace the session for a user, creating it if absent
    ///
    /// The new session starts with the given refresh token as current and an
    /// empty rotation history, discarding any prior session state for the
    /// user. This is what enforces a single active session per user.
    ///
    /// # Returns
    /// * `Ok(Session)` - The stored session
    /// * `Err(DomainError)` - Persistence failed
    async fn upsert(&self, user_id: Uuid, refresh_token: &str) -> Result<Session, DomainError>;

    /// Find the session owned by a user
    ///
    /// # Returns
    /// * `Ok(Some(Session))` - Session found
    /// * `Ok(None)` - User has no active session
    /// * `Err(DomainError)` - Persistence error occurred
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Session>, DomainError>;

    /// Find the session whose current refresh token equals the argument
    async fn find_by_current_token(&self, token: &str) -> Result<Option<Session>, DomainError>;

    /// Find the session whose rotation history contains the argument
    ///
    /// A hit here means the presented token was already consumed and is
    /// being replayed.
    async fn find_by_used_token(&self, token: &str) -> Result<Option<Session>, DomainError>;

    /// Remove one session by its record identity
    ///
    /// # Returns
    /// * `Ok(true)` - A record was removed
    /// * `Ok(false)` - No record existed with that id
    async fn delete_by_id(&self, session_id: Uuid) -> Result<bool, DomainError>;

    /// Remove the session owned by a user, if any
    ///
    /// # Returns
    /// * `Ok(true)` - A record was removed
    /// * `Ok(false)` - The user had no session
    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<bool, DomainError>;

    /// Rotate the refresh token for a session, compare-and-swap style
    ///
    /// Sets `current_refresh_token = new_token` and appends `retired_token`
    /// to the rotation history (set-union semantics), but only if the
    /// session's current token still equals `retired_token` at write time.
    /// Exactly one of any set of concurrent rotations with the same retired
    /// token can win.
    ///
    /// # Returns
    /// * `Ok(true)` - Rotation applied
    /// * `Ok(false)` - The current token no longer matched `retired_token`
    async fn rotate_token(
        &self,
        session_id: Uuid,
        new_token: &str,
        retired_token: &str,
    ) -> Result<bool, DomainError>;
}
