//! Repository interfaces for the persistence layer.

pub mod session;
pub mod user;

pub use session::SessionRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use session::MockSessionRepository;
#[cfg(test)]
pub use user::MockUserRepository;
