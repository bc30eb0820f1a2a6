//! Domain entities representing core business objects.

pub mod order;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use order::{NewOrder, Order};
pub use token::{Claims, TOKEN_TTL_HOURS};
pub use user::{NewUser, User, UserProfile};
