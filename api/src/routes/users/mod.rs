//! User route handlers
//!
//! - `POST /users` - registration (public)
//! - `GET /users` - paginated listing with age filters
//! - `GET/PUT/DELETE /users/{id}` - single user operations

pub mod delete;
pub mod get;
pub mod list;
pub mod register;
pub mod update;

pub use delete::delete;
pub use get::get;
pub use list::list;
pub use register::register;
pub use update::update;
