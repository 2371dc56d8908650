use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{AuthResponseDto, RegisterRequest};
use crate::handlers::error_handler::handle_domain_error;

use rp_core::repositories::{SessionRepository, UserRepository};
use rp_core::services::PasswordHasher;

use super::{auth_cookie, validation_error_response, AppState, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};

/// Handler for POST /api/v1/auth/register
///
/// Creates a new account and signs the caller in immediately.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "string",
///     "email": "string",
///     "password": "string"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// The public account fields plus a token pair; the pair is also set as
/// `accessToken` and `refreshToken` cookies.
///
/// ## Errors
/// - 400 Bad Request: Validation failed
/// - 409 Conflict: Email already registered
/// - 500 Internal Server Error: Persistence or token generation failure
pub async fn register<U, S, P>(
    state: web::Data<AppState<U, S, P>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    P: PasswordHasher + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(errors);
    }

    match state
        .auth_service
        .register(&request.name, &request.email, &request.password)
        .await
    {
        Ok(response) => {
            let secure = state.cookies.secure;
            HttpResponse::Created()
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
        Err(error) => handle_domain_error(error),
    }
}
