//! Shared test fixtures for authentication service tests

use std::sync::Arc;

use crate::errors::DomainError;
use crate::repositories::{MockSessionRepository, MockUserRepository};
use crate::services::auth::{AuthService, PasswordHasher};
use crate::services::token::tests::keys::{TEST_PRIVATE_KEY, TEST_PUBLIC_KEY};
use crate::services::token::{Rs256KeyManager, TokenService, TokenServiceConfig};

/// Transparent "hash" for tests: hash(p) = "hashed:" + p
pub struct MockPasswordHasher;

impl PasswordHasher for MockPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        Ok(format!("hashed:{}", plaintext))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, DomainError> {
        Ok(hash == format!("hashed:{}", plaintext))
    }
}

pub type TestAuthService = AuthService<MockUserRepository, MockSessionRepository, MockPasswordHasher>;

pub struct TestHarness {
    pub users: Arc<MockUserRepository>,
    pub sessions: Arc<MockSessionRepository>,
    pub service: TestAuthService,
}

/// Build an auth service wired entirely to in-memory fakes
pub fn harness() -> TestHarness {
    let keys = Rs256KeyManager::from_pem_strings(TEST_PRIVATE_KEY, TEST_PUBLIC_KEY)
        .expect("failed to load test keys");
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::default(), keys));

    let users = Arc::new(MockUserRepository::new());
    let sessions = Arc::new(MockSessionRepository::new());

    let service = AuthService::new(
        Arc::clone(&users),
        Arc::clone(&sessions),
        Arc::new(MockPasswordHasher),
        token_service,
    );

    TestHarness {
        users,
        sessions,
        service,
    }
}
