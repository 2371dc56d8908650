//! Authentication response value object.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::PublicUser;

/// Result of a successful sign-up, login, or token refresh
///
/// Contains the public account fields together with a freshly minted token
/// pair. The password hash never appears here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Public fields of the authenticated account
    pub user: PublicUser,

    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// Access token expiration time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiration time in seconds
    pub refresh_expires_in: i64,
}

impl AuthResponse {
    /// Creates an authentication response from a token pair and the account
    pub fn new(user: PublicUser, pair: TokenPair) -> Self {
        Self {
            user,
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            access_expires_in: pair.access_expires_in,
            refresh_expires_in: pair.refresh_expires_in,
        }
    }
}
