use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth_dto::{AuthResponseDto, RefreshTokenRequest};
use crate::handlers::error_handler::handle_domain_error;

use rp_core::errors::{AuthError, DomainError, TokenError};
use rp_core::repositories::{SessionRepository, UserRepository};
use rp_core::services::PasswordHasher;

use super::{auth_cookie, removal_cookie, AppState, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};

/// Handler for POST /api/v1/auth/refresh
///
/// Rotates the refresh token: the presented token is retired and a fresh
/// pair is issued. The token is read from the JSON body or, failing that,
/// the `refreshToken` cookie.
///
/// # Request Body (optional)
///
/// ```json
/// {
///     "refresh_token": "string"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// A new token pair, also set as cookies.
///
/// ## Errors
/// - 401 Unauthorized: Missing, unknown, expired or malformed token
/// - 403 Forbidden: A retired token was replayed; the session is destroyed
///   and both cookies are cleared
pub async fn refresh<U, S, P>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, P>>,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    P: PasswordHasher + 'static,
{
    let presented = body
        .and_then(|b| b.into_inner().refresh_token)
        .or_else(|| {
            req.cookie(REFRESH_TOKEN_COOKIE)
                .map(|c| c.value().to_string())
        });

    let presented = match presented {
        Some(token) => token,
        None => return handle_domain_error(TokenError::RefreshTokenNotFound.into()),
    };

    match state.auth_service.refresh(&presented).await {
        Ok(response) => {
            let secure = state.cookies.secure;
            HttpResponse::Ok()
                .cookie(auth_cookie(
                    ACCESS_TOKEN_COOKIE,
                    &response.access_token,
                    response.access_expires_in,
                    secure,
                ))
                .cookie(auth_cookie(
                    REFRESH_TOKEN_COOKIE,
                    &response.refresh_token,
                    response.refresh_expires_in,
                    secure,
                ))
                .json(AuthResponseDto::from(response))
        }
        Err(error) => {
            let replay = matches!(error, DomainError::Auth(AuthError::SuspiciousActivity));
            let mut response = handle_domain_error(error);

            // The session is gone after a replay, so the cookies are dead
            // weight; clear them to force a clean login.
            if replay {
                let _ = response.add_removal_cookie(&removal_cookie(ACCESS_TOKEN_COOKIE));
                let _ = response.add_removal_cookie(&removal_cookie(REFRESH_TOKEN_COOKIE));
            }

            response
        }
    }
}
