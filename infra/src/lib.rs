//! # Infrastructure Layer
//!
//! Concrete implementations of the persistence and hashing abstractions the
//! core crate defines. This crate owns the MySQL database access layer and
//! the bcrypt password hasher; nothing here contains business rules.

// Re-export core error types for convenience
pub use rp_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Services module - infrastructure service implementations
pub mod services;

use thiserror::Error;

/// Errors raised while standing up infrastructure components
#[derive(Debug, Error)]
pub enum InfraError {
    /// Configuration was missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
