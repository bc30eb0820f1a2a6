//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the ShopDesk application.
//! It provides the concrete PostgreSQL implementations of the repository
//! traits defined in `sd_core`.
//!
//! ## Architecture
//!
//! - **Database**: connection pool, schema bootstrap and `sqlx` repositories

use sd_core::errors::{AuthError, DomainError};

/// Database module - PostgreSQL implementations using SQLx
pub mod database;

/// SQLSTATE raised on unique constraint violations
const UNIQUE_VIOLATION: &str = "23505";

/// SQLSTATE raised on foreign key violations
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl InfrastructureError {
    fn sqlstate(&self) -> Option<String> {
        match self {
            InfrastructureError::Database(sqlx::Error::Database(db)) => {
                db.code().map(|code| code.into_owned())
            }
            _ => None,
        }
    }
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err.sqlstate().as_deref() {
            Some(UNIQUE_VIOLATION) => AuthError::EmailAlreadyExists.into(),
            Some(FOREIGN_KEY_VIOLATION) => DomainError::not_found("user"),
            _ => {
                tracing::error!(error = %err, "Storage operation failed");
                DomainError::internal(err.to_string())
            }
        }
    }
}

/// Convert a raw `sqlx` error into a domain error at the repository boundary
pub(crate) fn db_error(err: sqlx::Error) -> DomainError {
    InfrastructureError::from(err).into()
}
