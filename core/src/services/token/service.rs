//! Main token service implementation

use std::sync::Arc;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;
use super::revocation::RevocationList;

struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Issues and verifies HS256 bearer tokens
pub struct TokenService {
    config: TokenServiceConfig,
    keys: Option<SigningKeys>,
    validation: Validation,
    revoked: Arc<RevocationList>,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    /// * `revoked` - Shared revocation list consulted on every verification
    pub fn new(config: TokenServiceConfig, revoked: Arc<RevocationList>) -> Self {
        let keys = config
            .jwt_secret
            .as_deref()
            .filter(|secret| !secret.is_empty())
            .map(|secret| SigningKeys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            });

        if keys.is_none() {
            tracing::warn!("JWT secret is not configured; token issuance will fail");
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            config,
            keys,
            validation,
            revoked,
        }
    }

    /// Whether a signing secret is available
    pub fn is_configured(&self) -> bool {
        self.keys.is_some()
    }

    fn keys(&self) -> Result<&SigningKeys, DomainError> {
        self.keys
            .as_ref()
            .ok_or(DomainError::Token(TokenError::SecretNotConfigured))
    }

    /// Issues a signed token for `user_id`
    ///
    /// # Errors
    ///
    /// * `TokenError::SecretNotConfigured` - No signing secret is set
    /// * `TokenError::GenerationFailed` - Encoding failed
    pub fn issue(&self, user_id: i64) -> Result<String, DomainError> {
        let keys = self.keys()?;
        let claims = Claims::new(user_id, self.config.token_ttl);

        encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding).map_err(|e| {
            tracing::error!(error = %e, "Failed to encode token");
            DomainError::Token(TokenError::GenerationFailed)
        })
    }

    /// Verifies a token and returns the user id it was issued for
    ///
    /// # Errors
    ///
    /// * `TokenError::InvalidSignature` - Signed with a different secret
    /// * `TokenError::Expired` - Past its `exp` claim
    /// * `TokenError::Malformed` - Not a decodable HS256 token
    /// * `TokenError::InvalidClaims` - `user_id` missing, not an integer or not positive
    /// * `TokenError::Revoked` - Otherwise valid but revoked
    pub fn verify(&self, token: &str) -> Result<i64, DomainError> {
        let keys = self.keys()?;

        let data = decode::<Map<String, Value>>(token, &keys.decoding, &self.validation)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Malformed,
                };
                DomainError::Token(reason)
            })?;

        let user_id = data
            .claims
            .get("user_id")
            .and_then(Value::as_i64)
            .filter(|id| *id > 0)
            .ok_or(DomainError::Token(TokenError::InvalidClaims))?;

        if self.is_revoked(token) {
            return Err(DomainError::Token(TokenError::Revoked));
        }

        Ok(user_id)
    }

    /// Revokes a token so later verifications fail
    pub fn revoke(&self, token: &str) {
        self.revoked.revoke(token);
        tracing::info!("Token revoked");
    }

    /// Whether `token` has been revoked
    pub fn is_revoked(&self, token: &str) -> bool {
        self.revoked.contains(token)
    }
}
