//! Domain-specific error types for authentication and token operations
//!
//! Error messages here are intentionally terse; the presentation layer maps
//! each variant to an HTTP status and a client-facing body.

use rp_shared::types::response::ErrorResponse;
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Email not found")]
    EmailNotFound,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Authentication failed")]
    AuthenticationFailed,

    /// A retired refresh token was presented again. The message is kept
    /// generic on purpose: the caller must not learn whether the token was
    /// stolen or merely duplicated.
    #[error("Suspicious activity detected, please log in again")]
    SuspiciousActivity,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Refresh token not found")]
    RefreshTokenNotFound,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Failed to load signing keys: {message}")]
    KeyLoadError { message: String },
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            AuthError::EmailNotFound => "EMAIL_NOT_FOUND",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::AuthenticationFailed => "AUTHENTICATION_FAILED",
            AuthError::SuspiciousActivity => "SUSPICIOUS_ACTIVITY",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::TokenExpired => "TOKEN_EXPIRED",
            TokenError::InvalidTokenFormat => "INVALID_TOKEN_FORMAT",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::InvalidClaims => "INVALID_CLAIMS",
            TokenError::RefreshTokenNotFound => "REFRESH_TOKEN_NOT_FOUND",
            TokenError::TokenGenerationFailed => "TOKEN_GENERATION_FAILED",
            TokenError::KeyLoadError { .. } => "KEY_LOAD_ERROR",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_conversion() {
        let error = TokenError::TokenExpired;
        let response: ErrorResponse = error.into();
        assert_eq!(response.error, "TOKEN_EXPIRED");
        assert!(response.message.contains("Token expired"));
    }

    #[test]
    fn test_replay_error_message_is_generic() {
        let message = AuthError::SuspiciousActivity.to_string();
        assert!(!message.to_lowercase().contains("stolen"));
        assert!(!message.to_lowercase().contains("replay"));
        assert!(message.contains("log in again"));
    }
}
