//! Configuration for the token service

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS};

/// Configuration for the token service
///
/// The access token must be substantially shorter-lived than the refresh
/// token; the defaults are 15 minutes and 7 days.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Access token expiry in seconds
    pub access_token_expiry: i64,
    /// Refresh token expiry in seconds
    pub refresh_token_expiry: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_token_expiry: ACCESS_TOKEN_EXPIRY_MINUTES * 60,
            refresh_token_expiry: REFRESH_TOKEN_EXPIRY_DAYS * 24 * 60 * 60,
        }
    }
}

impl From<&rp_shared::config::JwtConfig> for TokenServiceConfig {
    fn from(config: &rp_shared::config::JwtConfig) -> Self {
        Self {
            access_token_expiry: config.access_token_expiry,
            refresh_token_expiry: config.refresh_token_expiry,
        }
    }
}
