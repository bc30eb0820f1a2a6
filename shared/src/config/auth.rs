//! Authentication configuration: token signing and password hashing

use serde::{Deserialize, Serialize};

use super::{env_parse, env_var};

/// Default bearer token lifetime in hours
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 72;

/// Default bcrypt cost factor
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HMAC secret used to sign bearer tokens. `None` disables token issuance.
    #[serde(default)]
    pub jwt_secret: Option<String>,

    /// Bearer token lifetime in hours
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,

    /// bcrypt cost factor for password hashing
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            jwt_secret: env_var("JWT_SECRET"),
            token_ttl_hours: env_parse("JWT_TTL_HOURS", DEFAULT_TOKEN_TTL_HOURS),
            bcrypt_cost: env_parse("BCRYPT_COST", DEFAULT_BCRYPT_COST),
        }
    }

    /// Create a configuration with the given signing secret
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: Some(secret.into()),
            ..Default::default()
        }
    }
}

fn default_token_ttl_hours() -> i64 {
    DEFAULT_TOKEN_TTL_HOURS
}

fn default_bcrypt_cost() -> u32 {
    DEFAULT_BCRYPT_COST
}
