//! PostgreSQL repository implementations

pub mod order_repository_impl;
pub mod user_repository_impl;

pub use order_repository_impl::PgOrderRepository;
pub use user_repository_impl::PgUserRepository;
