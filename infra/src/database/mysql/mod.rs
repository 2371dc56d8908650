//! MySQL repository implementations backed by SQLx.

pub mod session_repository_impl;
pub mod user_repository_impl;

pub use session_repository_impl::MySqlSessionRepository;
pub use user_repository_impl::MySqlUserRepository;
