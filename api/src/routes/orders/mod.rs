//! Order route handlers nested under a user

pub mod create;
pub mod list;

pub use create::create;
pub use list::list;
