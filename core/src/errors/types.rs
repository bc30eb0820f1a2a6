//! Error types for authentication, token handling and request validation
//!
//! Display strings are meant for logs. Client-facing text is produced by the
//! presentation layer from the variant itself so it can be localized.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    /// Returned for both an unknown email and a wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Bearer token errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Malformed token")]
    Malformed,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token revoked")]
    Revoked,

    #[error("Token signing secret not configured")]
    SecretNotConfigured,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// A single failing field constraint, as reported by body validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// JSON field name
    pub field: String,
    /// Rule identifier: `required`, `email`, `min`, `gt`, ...
    pub rule: String,
    /// Rule parameter (minimum length, lower bound), if the rule has one
    pub param: Option<String>,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, rule: impl Into<String>, param: Option<String>) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
            param,
        }
    }
}

/// Request validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid path id")]
    InvalidId,

    #[error("Invalid query parameter: {param}")]
    InvalidQuery { param: String },

    #[error("Malformed request body: {reason}")]
    MalformedBody { reason: String },

    #[error("Field validation failed for {} field(s)", .0.len())]
    Fields(Vec<FieldViolation>),
}
