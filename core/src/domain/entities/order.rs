//! Order entity placed by a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored order record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Store-assigned identifier
    pub id: i64,

    /// Owning user
    pub user_id: i64,

    /// Product name
    pub product: String,

    /// Number of items, always positive
    pub quantity: i32,

    /// Unit price, always positive
    pub price: f64,

    /// Creation time, assigned by the store and never changed
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a new order
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: i64,
    pub product: String,
    pub quantity: i32,
    pub price: f64,
}
