//! Services module - infrastructure service implementations

pub mod password;

#[cfg(test)]
mod tests;

pub use password::BcryptPasswordHasher;
