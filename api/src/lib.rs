//! # ShopDesk API
//!
//! HTTP layer of the ShopDesk backend: routing, authentication middleware,
//! request validation and localized error responses. The binary in
//! `main.rs` wires it to PostgreSQL; tests wire it to the in-memory store.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
