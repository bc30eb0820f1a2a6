//! Shared utilities and common types for the ShopDesk server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Response envelopes shared by every endpoint
//! - Pagination and language types

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, DatabaseConfig, Environment, ServerConfig};
pub use types::{ErrorResponse, Language, Pagination, ValidationErrorResponse};
