//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - Access and refresh token minting as RS256-signed JWTs
//! - Token verification, including the lenient decode used on the replay path
//! - RS256 key management for asymmetric signing

mod config;
mod key_manager;
mod service;

#[cfg(test)]
pub(crate) mod tests;

pub use config::TokenServiceConfig;
pub use key_manager::Rs256KeyManager;
pub use service::TokenService;
