//! Business services containing domain logic and use cases.

pub mod order;
pub mod password;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use order::OrderService;
pub use password::{BcryptPasswordHasher, PasswordHasher};
pub use token::{RevocationList, TokenService, TokenServiceConfig};
pub use user::UserService;
