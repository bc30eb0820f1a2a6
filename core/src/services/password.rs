//! One-way password hashing.

use crate::errors::DomainError;

/// Hash and verify passwords
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted digest of `plain`
    fn hash(&self, plain: &str) -> Result<String, DomainError>;

    /// Check `plain` against a stored digest.
    ///
    /// A digest that cannot be parsed counts as a mismatch.
    fn verify(&self, plain: &str, digest: &str) -> Result<bool, DomainError>;
}

/// bcrypt with a random salt per hash
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain: &str) -> Result<String, DomainError> {
        bcrypt::hash(plain, self.cost).map_err(|e| DomainError::Hashing {
            message: e.to_string(),
        })
    }

    fn verify(&self, plain: &str, digest: &str) -> Result<bool, DomainError> {
        match bcrypt::verify(plain, digest) {
            Ok(matches) => Ok(matches),
            Err(e) => {
                tracing::debug!(error = %e, "Stored password digest could not be parsed");
                Ok(false)
            }
        }
    }
}
