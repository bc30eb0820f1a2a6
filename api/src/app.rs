//! Application state and factory
//!
//! This module holds the shared service state and builds the Actix-web
//! application with every route wired up. `main` and the HTTP tests both go
//! through [`create_app`].

use std::sync::Arc;

use actix_web::{web, App};

use crate::handlers::not_found;
use crate::middleware::JwtAuth;
use crate::routes::{auth, health, orders, users};

use sd_core::repositories::{OrderRepository, UserRepository};
use sd_core::services::{OrderService, PasswordHasher, TokenService, UserService};

/// Application state that holds shared services
pub struct AppState<U, O, H>
where
    U: UserRepository,
    O: OrderRepository,
    H: PasswordHasher,
{
    pub user_service: Arc<UserService<U, H>>,
    pub order_service: Arc<OrderService<O>>,
    pub token_service: Arc<TokenService>,
}

impl<U, O, H> AppState<U, O, H>
where
    U: UserRepository,
    O: OrderRepository,
    H: PasswordHasher + 'static,
{
    /// Build every service over the given stores
    pub fn new(users: Arc<U>, orders: Arc<O>, hasher: Arc<H>, tokens: Arc<TokenService>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(users, hasher, Arc::clone(&tokens))),
            order_service: Arc::new(OrderService::new(orders)),
            token_service: tokens,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, O, H>(
    app_state: web::Data<AppState<U, O, H>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    H: PasswordHasher + 'static,
{
    let tokens = Arc::clone(&app_state.token_service);

    App::new()
        .app_data(app_state)
        // Health check endpoint
        .route("/health", web::get().to(health::health_check))
        .route("/auth/login", web::post().to(auth::login::<U, O, H>))
        // Registration is public, listing requires a token
        .service(
            web::resource("/users")
                .route(web::post().to(users::register::<U, O, H>))
                .route(
                    web::get()
                        .to(users::list::<U, O, H>)
                        .wrap(JwtAuth::new(Arc::clone(&tokens))),
                ),
        )
        .service(
            web::resource("/users/{id}")
                .wrap(JwtAuth::new(Arc::clone(&tokens)))
                .route(web::get().to(users::get::<U, O, H>))
                .route(web::put().to(users::update::<U, O, H>))
                .route(web::delete().to(users::delete::<U, O, H>)),
        )
        .service(
            web::resource("/users/{id}/orders")
                .wrap(JwtAuth::new(tokens))
                .route(web::post().to(orders::create::<U, O, H>))
                .route(web::get().to(orders::list::<U, O, H>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}
