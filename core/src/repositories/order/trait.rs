//! Order repository trait.

use async_trait::async_trait;

use crate::domain::entities::order::{NewOrder, Order};
use crate::errors::DomainError;

/// Repository trait for Order entity persistence operations
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert a new order, assigning its id and creation time
    ///
    /// # Errors
    /// * `DomainError::NotFound` - `order.user_id` does not reference a user
    async fn create(&self, order: NewOrder) -> Result<Order, DomainError>;

    /// All orders of a user, newest first (`created_at` then `id`, descending).
    /// Unknown users simply have no orders.
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Order>, DomainError>;
}
