//! Unit tests for the token service

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::{Role, User};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{Rs256KeyManager, TokenService, TokenServiceConfig};

use super::keys::{OTHER_PRIVATE_KEY, TEST_PRIVATE_KEY, TEST_PUBLIC_KEY};

fn test_service() -> TokenService {
    let keys = Rs256KeyManager::from_pem_strings(TEST_PRIVATE_KEY, TEST_PUBLIC_KEY)
        .expect("failed to load test keys");
    TokenService::new(TokenServiceConfig::default(), keys)
}

/// A service whose tokens are already expired (past the validation leeway).
fn expired_service() -> TokenService {
    let keys = Rs256KeyManager::from_pem_strings(TEST_PRIVATE_KEY, TEST_PUBLIC_KEY)
        .expect("failed to load test keys");
    let config = TokenServiceConfig {
        access_token_expiry: -120,
        refresh_token_expiry: -120,
    };
    TokenService::new(config, keys)
}

fn test_user() -> User {
    User::new("Ada", "ada@example.com", "hash")
}

#[test]
fn test_issue_pair_round_trip() {
    let service = test_service();
    let user = test_user();

    let pair = service.issue_pair(&user).expect("failed to issue pair");

    assert!(!pair.access_token.is_empty());
    assert!(!pair.refresh_token.is_empty());
    assert_ne!(pair.access_token, pair.refresh_token);
    assert_eq!(pair.access_expires_in, 15 * 60);
    assert_eq!(pair.refresh_expires_in, 7 * 24 * 60 * 60);

    let claims = service.verify(&pair.access_token).expect("verify failed");
    assert_eq!(claims.user_id().unwrap(), user.id);
    assert_eq!(claims.email, "ada@example.com");
    assert_eq!(claims.role, Role::User);
}

#[test]
fn test_refresh_token_outlives_access_token() {
    let service = test_service();
    let pair = service.issue_pair(&test_user()).unwrap();

    let access = service.verify(&pair.access_token).unwrap();
    let refresh = service.verify(&pair.refresh_token).unwrap();

    assert!(refresh.exp > access.exp);
}

#[test]
fn test_expired_token_rejected() {
    let pair = expired_service().issue_pair(&test_user()).unwrap();

    let result = test_service().verify(&pair.access_token);

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_decode_expired_still_checks_signature() {
    let service = test_service();
    let pair = expired_service().issue_pair(&test_user()).unwrap();

    // Expired but properly signed: claims come back.
    let claims = service
        .decode_expired(&pair.refresh_token)
        .expect("decode_expired failed");
    assert_eq!(claims.email, "ada@example.com");

    // Garbage never does.
    assert!(service.decode_expired("not.a.jwt").is_err());
}

#[test]
fn test_token_signed_with_other_key_rejected() {
    let service = test_service();

    let other_keys = Rs256KeyManager::from_pem_strings(OTHER_PRIVATE_KEY, super::keys::OTHER_PUBLIC_KEY)
        .expect("failed to load other keys");
    let forged = TokenService::new(TokenServiceConfig::default(), other_keys)
        .issue_pair(&test_user())
        .unwrap();

    assert!(service.verify(&forged.access_token).is_err());
}

#[test]
fn test_algorithm_substitution_rejected() {
    let service = test_service();
    let user = test_user();

    // Classic confusion attack: HS256 token keyed with the public key bytes.
    let claims = Claims::new(&user, 900);
    let forged = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_PUBLIC_KEY.as_bytes()),
    )
    .unwrap();

    assert!(service.verify(&forged).is_err());
}

#[test]
fn test_malformed_token_rejected() {
    let service = test_service();

    assert!(service.verify("").is_err());
    assert!(service.verify("abc").is_err());
    assert!(service.verify("a.b.c").is_err());
}
