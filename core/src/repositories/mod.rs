//! Repository interfaces for entity persistence, plus an in-memory store.

pub mod mock;
pub mod order;
pub mod user;

pub use mock::MockStore;
pub use order::OrderRepository;
pub use user::UserRepository;
