//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};

use crate::domain::entities::token::{Claims, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;
use super::key_manager::Rs256KeyManager;

/// Service for minting and verifying RS256-signed JWTs
///
/// Both access and refresh tokens are signed with the same private key and
/// carry the same claims schema; they differ only in lifetime. Verification
/// accepts RS256 exclusively, so a token re-signed under another algorithm
/// (e.g. HS256 keyed with the public key) is rejected outright.
pub struct TokenService {
    config: TokenServiceConfig,
    keys: Rs256KeyManager,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig, keys: Rs256KeyManager) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = true;

        Self {
            config,
            keys,
            validation,
        }
    }

    /// Mints a fresh access + refresh token pair for a user
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The generated token pair
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue_pair(&self, user: &User) -> Result<TokenPair, DomainError> {
        let access_claims = Claims::new(user, self.config.access_token_expiry);
        let refresh_claims = Claims::new(user, self.config.refresh_token_expiry);

        let access_token = self.encode_jwt(&access_claims)?;
        let refresh_token = self.encode_jwt(&refresh_claims)?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry,
            self.config.refresh_token_expiry,
        ))
    }

    /// Encodes claims into a JWT
    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::RS256);
        encode(&header, claims, self.keys.encoding_key())
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a token's signature and expiry and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(DomainError)` - Token is invalid, expired, or malformed
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, self.keys.decoding_key(), &self.validation)
            .map_err(|e| map_jwt_error(&e))?;

        Ok(token_data.claims)
    }

    /// Decodes a token with expiry validation disabled
    ///
    /// The signature is still checked. Used on the replay path, where a
    /// retired token must yield its subject even after its expiry passed.
    pub fn decode_expired(&self, token: &str) -> Result<Claims, DomainError> {
        let mut validation = self.validation.clone();
        validation.validate_exp = false;

        let token_data = decode::<Claims>(token, self.keys.decoding_key(), &validation)
            .map_err(|e| map_jwt_error(&e))?;

        Ok(token_data.claims)
    }
}

fn map_jwt_error(error: &jsonwebtoken::errors::Error) -> DomainError {
    use jsonwebtoken::errors::ErrorKind;

    let token_error = match error.kind() {
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
            TokenError::InvalidSignature
        }
        ErrorKind::Json(_) => TokenError::InvalidClaims,
        _ => TokenError::InvalidTokenFormat,
    };

    DomainError::Token(token_error)
}
