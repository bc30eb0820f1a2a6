//! Authenticated caller identity.

/// Subject of a verified bearer token together with the raw token it presented
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub user_id: i64,
    pub token: String,
}

impl Caller {
    pub fn new(user_id: i64, token: impl Into<String>) -> Self {
        Self {
            user_id,
            token: token.into(),
        }
    }

    /// Whether this caller is acting on their own account
    pub fn is_self(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}
