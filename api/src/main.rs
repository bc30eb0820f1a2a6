use std::sync::Arc;

use actix_web::{middleware::Logger, web, HttpServer};
use anyhow::Context;
use log::{info, warn};

use sd_api::{create_app, AppState};
use sd_core::services::{BcryptPasswordHasher, RevocationList, TokenService};
use sd_infra::database::{ensure_schema, DatabasePool, PgOrderRepository, PgUserRepository};
use sd_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    // Initialize logger
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.environment.default_log_filter()),
    );

    info!("Starting ShopDesk API Server ({})", config.environment);

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    if !pool
        .health_check()
        .await
        .context("database health check failed")?
    {
        anyhow::bail!("database health check returned an unexpected result");
    }
    ensure_schema(pool.get_pool())
        .await
        .context("failed to prepare the database schema")?;
    info!("Database ready: {}", pool.get_statistics());

    let revoked = Arc::new(RevocationList::new());
    let tokens = Arc::new(TokenService::new((&config.auth).into(), revoked));
    if !tokens.is_configured() {
        warn!("JWT_SECRET is not set; logins will fail until it is configured");
    }

    let state = web::Data::new(AppState::new(
        Arc::new(PgUserRepository::new(pool.get_pool().clone())),
        Arc::new(PgOrderRepository::new(pool.get_pool().clone())),
        Arc::new(BcryptPasswordHasher::new(config.auth.bcrypt_cost)),
        tokens,
    ));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone()).wrap(Logger::default()))
        .shutdown_timeout(config.server.shutdown_timeout);
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    info!("Server stopped, closing database pool");
    pool.close().await;
    Ok(())
}
