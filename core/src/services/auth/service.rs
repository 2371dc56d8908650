//! Main authentication service implementation

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{SessionRepository, UserRepository};
use crate::services::token::TokenService;

use super::password::PasswordHasher;

/// Authentication service mediating every identity transition
///
/// This is the sole writer of session records: sign-up and login replace a
/// user's session, refresh rotates it, logout and replay detection destroy
/// it. All persistence goes through the repository traits.
pub struct AuthService<U, S, P>
where
    U: UserRepository,
    S: SessionRepository,
    P: PasswordHasher,
{
    /// User repository for account lookups and creation
    user_repository: Arc<U>,
    /// Session repository, the token store
    session_repository: Arc<S>,
    /// Adaptive password hashing
    password_hasher: Arc<P>,
    /// Token service for JWT minting and verification
    token_service: Arc<TokenService>,
}

impl<U, S, P> AuthService<U, S, P>
where
    U: UserRepository,
    S: SessionRepository,
    P: PasswordHasher,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        session_repository: Arc<S>,
        password_hasher: Arc<P>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repository,
            session_repository,
            password_hasher,
            token_service,
        }
    }

    /// Register a new account and start its first session
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Public account fields plus a fresh token pair
    /// * `Err(DomainError)` - Email already registered, or persistence failed
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<AuthResponse> {
        if self.user_repository.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = self.password_hasher.hash(password)?;
        let user = self
            .user_repository
            .create(User::new(name, email, password_hash))
            .await?;

        info!(user_id = %user.id, "new account registered");

        self.start_session(user).await
    }

    /// Authenticate with email and password and start a session
    ///
    /// A successful login replaces any existing session for the user,
    /// invalidating refresh tokens from prior logins.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::EmailNotFound)?;

        if !self.password_hasher.verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        info!(user_id = %user.id, "login succeeded");

        self.start_session(user).await
    }

    /// End the caller's session by record identity
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The session was removed
    /// * `Err(DomainError)` - No session record existed (already logged out)
    pub async fn logout(&self, session_id: Uuid) -> DomainResult<()> {
        let removed = self.session_repository.delete_by_id(session_id).await?;
        if !removed {
            return Err(DomainError::NotFound {
                resource: "session".to_string(),
            });
        }

        Ok(())
    }

    /// Rotate a refresh token, detecting replays of retired tokens
    ///
    /// The replay check runs before the current-token check: a token that
    /// somehow appears in both takes the suspicious-activity path.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - A new token pair; the presented token is retired
    /// * `Err(DomainError)` - Replay detected (session destroyed), token
    ///   unknown, or token invalid/expired
    pub async fn refresh(&self, presented: &str) -> DomainResult<AuthResponse> {
        if let Some(session) = self.session_repository.find_by_used_token(presented).await? {
            // A retired token came back. Either an attacker replayed a stolen
            // token or the legitimate client lost the rotation response; the
            // two are indistinguishable, so the whole session dies.
            let user_id = self
                .token_service
                .decode_expired(presented)
                .ok()
                .and_then(|claims| claims.user_id().ok())
                .unwrap_or(session.user_id);

            self.session_repository.delete_by_user_id(user_id).await?;
            warn!(%user_id, "refresh token replay detected, session destroyed");

            return Err(AuthError::SuspiciousActivity.into());
        }

        let session = self
            .session_repository
            .find_by_current_token(presented)
            .await?
            .ok_or(TokenError::RefreshTokenNotFound)?;

        let claims = self.token_service.verify(presented)?;

        let user = self
            .user_repository
            .find_by_email(&claims.email)
            .await?
            .ok_or(AuthError::AuthenticationFailed)?;

        let pair = self.token_service.issue_pair(&user)?;

        let rotated = self
            .session_repository
            .rotate_token(session.id, &pair.refresh_token, presented)
            .await?;
        if !rotated {
            // Lost a concurrent rotation race; the presented token is no
            // longer current.
            return Err(TokenError::RefreshTokenNotFound.into());
        }

        Ok(AuthResponse::new(user.public(), pair))
    }

    /// Mint a token pair and upsert the session record for the user
    async fn start_session(&self, user: User) -> DomainResult<AuthResponse> {
        let pair = self.token_service.issue_pair(&user)?;

        self.session_repository
            .upsert(user.id, &pair.refresh_token)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("failed to persist session: {}", e),
            })?;

        Ok(AuthResponse::new(user.public(), pair))
    }
}
