//! Database module - PostgreSQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management
//! - Schema bootstrap at startup
//! - Repository implementations for users and orders

pub mod connection;
pub mod postgres;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use postgres::{PgOrderRepository, PgUserRepository};
pub use schema::ensure_schema;
