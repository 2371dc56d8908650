//! Database module - MySQL implementations using SQLx
//!
//! Provides connection pool management and repository implementations for
//! the persistence traits defined in the core crate.

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::{MySqlSessionRepository, MySqlUserRepository};
