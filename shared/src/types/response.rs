//! JSON envelopes used by every error response

use serde::{Deserialize, Serialize};

/// Single-message error envelope: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Field validation envelope: `{"errors": ["...", "..."]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

impl ValidationErrorResponse {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }
}
