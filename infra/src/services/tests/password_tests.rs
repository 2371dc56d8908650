//! Unit tests for the bcrypt password hasher

use rp_core::services::PasswordHasher;

use crate::services::BcryptPasswordHasher;

// The minimum bcrypt cost keeps these tests fast.
fn hasher() -> BcryptPasswordHasher {
    BcryptPasswordHasher::new(4)
}

#[test]
fn test_hash_verifies_against_original_password() {
    let hasher = hasher();

    let hash = hasher.hash("correct horse battery staple").unwrap();

    assert!(hasher.verify("correct horse battery staple", &hash).unwrap());
}

#[test]
fn test_wrong_password_does_not_verify() {
    let hasher = hasher();

    let hash = hasher.hash("original").unwrap();

    assert!(!hasher.verify("different", &hash).unwrap());
}

#[test]
fn test_equal_passwords_hash_differently() {
    let hasher = hasher();

    let first = hasher.hash("same password").unwrap();
    let second = hasher.hash("same password").unwrap();

    // Each call draws a fresh salt, so the strings must differ even though
    // both verify against the same password.
    assert_ne!(first, second);
    assert!(hasher.verify("same password", &first).unwrap());
    assert!(hasher.verify("same password", &second).unwrap());
}

#[test]
fn test_garbage_hash_is_an_error() {
    let hasher = hasher();

    assert!(hasher.verify("anything", "not-a-bcrypt-hash").is_err());
}
