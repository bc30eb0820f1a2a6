//! Schema bootstrap run at startup
//!
//! Creates the `users` and `orders` tables when they are missing. Existing
//! tables are left untouched.

use sqlx::PgPool;

use crate::InfrastructureError;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id            BIGSERIAL PRIMARY KEY,
        name          TEXT NOT NULL,
        email         TEXT NOT NULL,
        age           INTEGER NOT NULL CHECK (age > 0),
        password_hash TEXT NOT NULL,
        CONSTRAINT users_email_key UNIQUE (email)
    )
"#;

const CREATE_ORDERS: &str = r#"
    CREATE TABLE IF NOT EXISTS orders (
        id         BIGSERIAL PRIMARY KEY,
        user_id    BIGINT NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        product    TEXT NOT NULL,
        quantity   INTEGER NOT NULL CHECK (quantity > 0),
        price      DOUBLE PRECISION NOT NULL CHECK (price > 0),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_ORDERS_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS orders_user_id_created_at_idx ON orders (user_id, created_at DESC)";

/// Create missing tables and indexes
pub async fn ensure_schema(pool: &PgPool) -> Result<(), InfrastructureError> {
    tracing::info!("Ensuring database schema");

    for statement in [CREATE_USERS, CREATE_ORDERS, CREATE_ORDERS_USER_INDEX] {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            tracing::error!("Schema bootstrap failed: {}", e);
            InfrastructureError::Database(e)
        })?;
    }

    tracing::info!("Database schema ready");
    Ok(())
}
