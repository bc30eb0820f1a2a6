//! PostgreSQL implementation of the OrderRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use sd_core::domain::entities::order::{NewOrder, Order};
use sd_core::errors::DomainError;
use sd_core::repositories::OrderRepository;

use crate::db_error;

/// PostgreSQL implementation of OrderRepository
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_order(row: &PgRow) -> Result<Order, DomainError> {
        Ok(Order {
            id: row.try_get("id").map_err(db_error)?,
            user_id: row.try_get("user_id").map_err(db_error)?,
            product: row.try_get("product").map_err(db_error)?,
            quantity: row.try_get("quantity").map_err(db_error)?,
            price: row.try_get("price").map_err(db_error)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_error)?,
        })
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, order: NewOrder) -> Result<Order, DomainError> {
        let query = r#"
            INSERT INTO orders (user_id, product, quantity, price)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, product, quantity, price, created_at
        "#;

        // a missing user surfaces as a foreign key violation -> NotFound
        let row = sqlx::query(query)
            .bind(order.user_id)
            .bind(&order.product)
            .bind(order.quantity)
            .bind(order.price)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        Self::row_to_order(&row)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Order>, DomainError> {
        let query = r#"
            SELECT id, user_id, product, quantity, price, created_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        rows.iter().map(Self::row_to_order).collect()
    }
}
