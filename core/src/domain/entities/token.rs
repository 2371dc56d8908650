//! Token types for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::{Role, User};

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Claims structure for the JWT payload
///
/// Both access and refresh tokens carry the same claim set and differ only
/// in their expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Email address of the account
    pub email: String,

    /// Role assigned to the account
    pub role: Role,

    /// Unique token identifier
    ///
    /// Keeps tokens minted within the same second distinct, so a rotated
    /// refresh token never collides with the one it retires.
    pub jti: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a user with the given lifetime in seconds
    pub fn new(user: &User, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role,
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Token pair returned to the client; never persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair with its expiry metadata
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: i64,
        refresh_expires_in: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new("Ada", "ada@example.com", "hash")
    }

    #[test]
    fn test_claims_carry_identity() {
        let user = test_user();
        let claims = Claims::new(&user, 900);

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.role, Role::User);
        assert_eq!(claims.user_id().unwrap(), user.id);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_are_unique_per_mint() {
        let user = test_user();
        let first = Claims::new(&user, 900);
        let second = Claims::new(&user, 900);

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_claims_expiry_window() {
        let user = test_user();
        let claims = Claims::new(&user, 900);

        assert_eq!(claims.exp - claims.iat, 900);
    }

    #[test]
    fn test_expired_claims() {
        let user = test_user();
        let mut claims = Claims::new(&user, 900);
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
    }

    #[test]
    fn test_claims_serialization_round_trip() {
        let user = test_user();
        let claims = Claims::new(&user, 900);

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }

    #[test]
    fn test_token_pair_metadata() {
        let pair = TokenPair::new(
            "access".to_string(),
            "refresh".to_string(),
            ACCESS_TOKEN_EXPIRY_MINUTES * 60,
            REFRESH_TOKEN_EXPIRY_DAYS * 24 * 60 * 60,
        );

        assert_eq!(pair.access_expires_in, 900);
        assert_eq!(pair.refresh_expires_in, 604800);
    }
}
