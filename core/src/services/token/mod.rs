//! Token service module for bearer token management
//!
//! This module handles:
//! - HS256 token issuance for authenticated users
//! - Token verification with structured failure reasons
//! - Revocation of individual tokens before their expiry

mod config;
mod revocation;
mod service;


pub use config::TokenServiceConfig;
pub use revocation::RevocationList;
pub use service::TokenService;
