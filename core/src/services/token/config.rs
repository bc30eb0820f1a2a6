//! Configuration for the token service

use chrono::Duration;
use sd_shared::config::AuthConfig;

use crate::domain::entities::token::TOKEN_TTL_HOURS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HMAC signing secret. Without one, issuing and verifying tokens fails.
    pub jwt_secret: Option<String>,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl: Duration::hours(TOKEN_TTL_HOURS),
        }
    }
}

impl TokenServiceConfig {
    /// Configuration with the given secret and the default lifetime
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: Some(secret.into()),
            ..Default::default()
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        let token_ttl = Duration::try_hours(config.token_ttl_hours)
            .filter(|ttl| *ttl > Duration::zero())
            .unwrap_or_else(|| {
                tracing::warn!(
                    token_ttl_hours = config.token_ttl_hours,
                    default_hours = TOKEN_TTL_HOURS,
                    "Token lifetime out of range; using default"
                );
                Duration::hours(TOKEN_TTL_HOURS)
            });

        Self {
            jwt_secret: config.jwt_secret.clone(),
            token_ttl,
        }
    }
}
