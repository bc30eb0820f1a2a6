//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthError, FieldViolation, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Password hashing failed: {message}")]
    Hashing { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Shorthand for [`DomainError::NotFound`]
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand for [`DomainError::Internal`]
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Whether the error stems from a server-side fault rather than the request
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            DomainError::Internal { .. }
                | DomainError::Hashing { .. }
                | DomainError::Token(TokenError::SecretNotConfigured)
                | DomainError::Token(TokenError::GenerationFailed)
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
