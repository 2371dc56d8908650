//! Mapping from domain errors to HTTP responses.
//!
//! Every error body is a `rp_shared::ErrorResponse` so clients see one
//! shape regardless of which layer failed. Status codes follow the domain
//! semantics: conflicts on duplicate registration, bad request for
//! credential mistakes, unauthorized for token problems, forbidden for
//! replay detection.

use actix_web::HttpResponse;

use rp_core::errors::{AuthError, DomainError, TokenError};
use rp_shared::types::response::ErrorResponse;

/// Convert a domain error into the appropriate HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => handle_auth_error(auth_error),
        DomainError::Token(token_error) => handle_token_error(token_error),
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("VALIDATION_ERROR", message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "NOT_FOUND",
            format!("{} not found", resource),
        )),
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "INTERNAL_ERROR",
                "An internal error occurred",
            ))
        }
    }
}

fn handle_auth_error(error: AuthError) -> HttpResponse {
    match error {
        AuthError::EmailAlreadyRegistered => HttpResponse::Conflict().json(ErrorResponse::from(error)),
        AuthError::EmailNotFound | AuthError::InvalidCredentials => {
            HttpResponse::BadRequest().json(ErrorResponse::from(error))
        }
        AuthError::AuthenticationFailed => {
            HttpResponse::Unauthorized().json(ErrorResponse::from(error))
        }
        AuthError::SuspiciousActivity => {
            log::warn!("Replay detected, responding with 403");
            HttpResponse::Forbidden().json(ErrorResponse::from(error))
        }
    }
}

fn handle_token_error(error: TokenError) -> HttpResponse {
    match error {
        TokenError::KeyLoadError { .. } | TokenError::TokenGenerationFailed => {
            log::error!("Token service failure: {}", error);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "INTERNAL_ERROR",
                "An internal error occurred",
            ))
        }
        // Expired, malformed, unknown and badly signed tokens all read as
        // an authentication failure to the client.
        _ => HttpResponse::Unauthorized().json(ErrorResponse::from(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_duplicate_email_maps_to_conflict() {
        let response = handle_domain_error(AuthError::EmailAlreadyRegistered.into());
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_credential_errors_map_to_bad_request() {
        let response = handle_domain_error(AuthError::InvalidCredentials.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = handle_domain_error(AuthError::EmailNotFound.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_replay_maps_to_forbidden() {
        let response = handle_domain_error(AuthError::SuspiciousActivity.into());
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_token_errors_map_to_unauthorized() {
        let response = handle_domain_error(TokenError::TokenExpired.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = handle_domain_error(TokenError::RefreshTokenNotFound.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_missing_session_maps_to_not_found() {
        let response = handle_domain_error(DomainError::NotFound {
            resource: "session".to_string(),
        });
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let response = handle_domain_error(DomainError::Internal {
            message: "connection refused".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
