//! Order domain service

use std::sync::Arc;

use crate::domain::entities::order::{NewOrder, Order};
use crate::domain::value_objects::NewOrderInput;
use crate::errors::DomainError;
use crate::repositories::OrderRepository;

/// Creates and lists orders on behalf of a user
pub struct OrderService<O: OrderRepository> {
    repository: Arc<O>,
}

impl<O: OrderRepository> OrderService<O> {
    pub fn new(repository: Arc<O>) -> Self {
        Self { repository }
    }

    /// Store a new order for `user_id`.
    ///
    /// The input is expected to be validated already and the user to exist.
    pub async fn create(&self, user_id: i64, input: NewOrderInput) -> Result<Order, DomainError> {
        tracing::info!(user_id, product = %input.product, "Creating order");

        let order = self
            .repository
            .create(NewOrder {
                user_id,
                product: input.product,
                quantity: input.quantity,
                price: input.price,
            })
            .await?;

        tracing::info!(order_id = order.id, user_id, "Order created");
        Ok(order)
    }

    /// Orders of `user_id`, newest first
    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Order>, DomainError> {
        self.repository.list_by_user(user_id).await
    }
}
