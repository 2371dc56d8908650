//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the access token from the `Authorization: Bearer` header or the
//! `accessToken` cookie, verifies it against the RS256 token service, then
//! resolves the caller's active session. Both the decoded claims and the
//! session ride along in the request extensions for handlers to pick up.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use rp_core::domain::entities::{Role, Session};
use rp_core::repositories::SessionRepository;
use rp_core::services::TokenService;

/// Authenticated caller context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from JWT claims
    pub user_id: Uuid,
    /// Email address from the claims
    pub email: String,
    /// Role from the claims
    pub role: Role,
    /// The caller's active session record
    pub session: Session,
}

/// JWT authentication middleware factory
///
/// Requires `web::Data<TokenService>` and
/// `web::Data<Arc<dyn SessionRepository>>` in the application data.
#[derive(Default)]
pub struct JwtAuth;

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_access_token(&req) {
                Some(token) => token,
                None => {
                    return Err(ErrorUnauthorized("Missing access token"));
                }
            };

            let token_service = req
                .app_data::<web::Data<TokenService>>()
                .ok_or_else(|| ErrorUnauthorized("Token verification not configured"))?;

            let claims = token_service
                .verify(&token)
                .map_err(|e| ErrorUnauthorized(format!("Token verification failed: {}", e)))?;

            let user_id = claims
                .user_id()
                .map_err(|_| ErrorUnauthorized("Invalid token subject"))?;

            let sessions = req
                .app_data::<web::Data<Arc<dyn SessionRepository>>>()
                .ok_or_else(|| ErrorUnauthorized("Session store not configured"))?;

            // A valid token without a live session is still unauthenticated;
            // logout and replay detection both leave tokens in this state.
            let session = sessions
                .find_by_user_id(user_id)
                .await
                .map_err(|_| ErrorUnauthorized("Session lookup failed"))?
                .ok_or_else(|| ErrorUnauthorized("No active session"))?;

            req.extensions_mut().insert(AuthContext {
                user_id,
                email: claims.email,
                role: claims.role,
                session,
            });

            service.call(req).await
        })
    }
}

/// Extracts the access token from the bearer header or the cookie
fn extract_access_token(req: &ServiceRequest) -> Option<String> {
    let from_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.to_string());

    from_header.or_else(|| req.cookie("accessToken").map(|c| c.value().to_string()))
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
