//! User service module: registration, login and account management.

mod service;

pub use service::UserService;
