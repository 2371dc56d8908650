//! Authentication service module
//!
//! Implements the identity transitions (sign-up, login, logout, refresh)
//! and the refresh-token rotation state machine with replay detection.

mod password;
mod service;

#[cfg(test)]
mod tests;

pub use password::PasswordHasher;
pub use service::AuthService;
