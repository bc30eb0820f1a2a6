//! Process-wide set of revoked bearer tokens

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

/// Tokens invalidated before their natural expiry.
///
/// Created once at startup and shared through an `Arc`. Entries are never
/// pruned.
#[derive(Debug, Default)]
pub struct RevocationList {
    tokens: RwLock<HashSet<String>>,
}

impl RevocationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a token as revoked. Revoking twice is a no-op.
    pub fn revoke(&self, token: &str) {
        let mut tokens = self.tokens.write().unwrap_or_else(PoisonError::into_inner);
        tokens.insert(token.to_string());
    }

    pub fn contains(&self, token: &str) -> bool {
        let tokens = self.tokens.read().unwrap_or_else(PoisonError::into_inner);
        tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
