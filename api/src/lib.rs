//! # API Layer
//!
//! HTTP surface of the Ripple backend: Actix Web routes, authentication
//! middleware, request/response DTOs, and the mapping from domain errors to
//! HTTP status codes. All business rules live in `rp_core`; handlers here
//! translate between HTTP and the domain services.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
