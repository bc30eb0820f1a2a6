//! # ShopDesk Core
//!
//! Core business logic and domain layer for the ShopDesk backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    Caller, Claims, NewOrder, NewOrderInput, NewUser, NewUserInput, Order, User, UserChanges,
    UserFilter, UserProfile,
};
pub use errors::{AuthError, DomainError, FieldViolation, TokenError, ValidationError};
pub use repositories::{MockStore, OrderRepository, UserRepository};
pub use services::{
    BcryptPasswordHasher, OrderService, PasswordHasher, RevocationList, TokenService,
    TokenServiceConfig, UserService,
};
