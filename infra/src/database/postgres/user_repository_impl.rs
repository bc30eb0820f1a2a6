//! PostgreSQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use sd_core::domain::entities::user::{NewUser, User};
use sd_core::domain::value_objects::UserFilter;
use sd_core::errors::DomainError;
use sd_core::repositories::UserRepository;

use crate::db_error;

/// PostgreSQL implementation of UserRepository
pub struct PgUserRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PostgreSQL user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
        Ok(User {
            id: row.try_get("id").map_err(db_error)?,
            name: row.try_get("name").map_err(db_error)?,
            email: row.try_get("email").map_err(db_error)?,
            age: row.try_get("age").map_err(db_error)?,
            password_hash: row.try_get("password_hash").map_err(db_error)?,
        })
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT id, name, email, age, password_hash FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row =
            sqlx::query("SELECT id, name, email, age, password_hash FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (name, email, age, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, age, password_hash
        "#;

        let row = sqlx::query(query)
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.age)
            .bind(&user.password_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        Self::row_to_user(&row)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET name = $2, email = $3, age = $4, password_hash = $5
            WHERE id = $1
            RETURNING id, name, email, age, password_hash
        "#;

        let row = sqlx::query(query)
            .bind(user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.age)
            .bind(&user.password_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        match row {
            Some(row) => Self::row_to_user(&row),
            None => Err(DomainError::not_found("user")),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        // orders rows go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, filter: &UserFilter) -> Result<Vec<User>, DomainError> {
        let query = r#"
            SELECT id, name, email, age, password_hash
            FROM users
            WHERE ($1::INTEGER IS NULL OR age >= $1)
              AND ($2::INTEGER IS NULL OR age <= $2)
            ORDER BY id ASC
            LIMIT $3 OFFSET $4
        "#;

        let rows = sqlx::query(query)
            .bind(filter.min_age)
            .bind(filter.max_age)
            .bind(filter.pagination.limit_i64())
            .bind(filter.pagination.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn count(&self, filter: &UserFilter) -> Result<u64, DomainError> {
        let query = r#"
            SELECT COUNT(*)
            FROM users
            WHERE ($1::INTEGER IS NULL OR age >= $1)
              AND ($2::INTEGER IS NULL OR age <= $2)
        "#;

        let total: i64 = sqlx::query_scalar(query)
            .bind(filter.min_age)
            .bind(filter.max_age)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }
}
