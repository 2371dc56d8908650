//! Authentication route handlers
//!
//! Endpoints under `/api/v1/auth`:
//! - `POST /register` - create an account and start a session
//! - `POST /login` - authenticate and replace any existing session
//! - `POST /refresh` - rotate the refresh token
//! - `POST /logout` - end the session (requires authentication)
//!
//! Login, register and refresh set the token pair both in the JSON body and
//! as HTTP-only cookies, so browser and native clients can pick either.

pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;

use std::sync::Arc;

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpResponse;
use validator::ValidationErrors;

use rp_core::repositories::{SessionRepository, UserRepository};
use rp_core::services::{AuthService, PasswordHasher};
use rp_shared::config::CookieConfig;
use rp_shared::types::response::ErrorResponse;

pub use login::login;
pub use logout::logout;
pub use refresh::refresh;
pub use register::register;

/// Cookie holding the access token
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Cookie holding the refresh token
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// Application state that holds shared services
pub struct AppState<U, S, P>
where
    U: UserRepository,
    S: SessionRepository,
    P: PasswordHasher,
{
    pub auth_service: Arc<AuthService<U, S, P>>,
    pub cookies: CookieConfig,
}

/// Build an HTTP-only auth cookie with a lifetime matching its token
pub fn auth_cookie(
    name: &'static str,
    value: &str,
    max_age_secs: i64,
    secure: bool,
) -> Cookie<'static> {
    Cookie::build(name, value.to_owned())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .max_age(Duration::seconds(max_age_secs))
        .finish()
}

/// Build a cookie that instructs the client to drop the named cookie
pub fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build(name, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .finish();
    cookie.make_removal();
    cookie
}

/// Turn validator errors into a 400 response with per-field messages
pub(crate) fn validation_error_response(errors: ValidationErrors) -> HttpResponse {
    let details: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();

    HttpResponse::BadRequest().json(ErrorResponse::new("VALIDATION_ERROR", details.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_cookie_attributes() {
        let cookie = auth_cookie(ACCESS_TOKEN_COOKIE, "tok", 900, true);

        assert_eq!(cookie.name(), "accessToken");
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(900)));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_insecure_cookie_outside_production() {
        let cookie = auth_cookie(REFRESH_TOKEN_COOKIE, "tok", 604800, false);

        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[test]
    fn test_removal_cookie_expires_immediately() {
        let cookie = removal_cookie(ACCESS_TOKEN_COOKIE);

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
