use actix_web::{web, HttpResponse};

use crate::dto::auth_dto::LogoutResponse;
use crate::handlers::error_handler::handle_domain_error;
use crate::middleware::auth::AuthContext;

use rp_core::repositories::{SessionRepository, UserRepository};
use rp_core::services::PasswordHasher;

use super::{removal_cookie, AppState, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};

/// Handler for POST /api/v1/auth/logout
///
/// Ends the caller's session and clears both auth cookies. Requires
/// authentication via bearer token or the `accessToken` cookie.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Logged out successfully"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid access token
/// - 404 Not Found: The session was already gone
pub async fn logout<U, S, P>(
    state: web::Data<AppState<U, S, P>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    P: PasswordHasher + 'static,
{
    match state.auth_service.logout(auth.session.id).await {
        Ok(()) => HttpResponse::Ok()
            .cookie(removal_cookie(ACCESS_TOKEN_COOKIE))
            .cookie(removal_cookie(REFRESH_TOKEN_COOKIE))
            .json(LogoutResponse {
                message: "Logged out successfully".to_string(),
            }),
        Err(error) => handle_domain_error(error),
    }
}
