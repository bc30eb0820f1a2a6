//! Bearer token claims.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default bearer token lifetime
pub const TOKEN_TTL_HOURS: i64 = 72;

/// Claims carried by every issued bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated user
    pub user_id: i64,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `user_id` valid for `ttl` from now.
    /// An expiry past the representable range saturates.
    pub fn new(user_id: i64, ttl: Duration) -> Self {
        let now = Utc::now();
        let exp = now.checked_add_signed(ttl).unwrap_or(if ttl < Duration::zero() {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        });

        Self {
            user_id,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }
}
