//! Value objects passed between the presentation and domain layers.

pub mod caller;
pub mod order_input;
pub mod user_input;

pub use caller::Caller;
pub use order_input::NewOrderInput;
pub use user_input::{NewUserInput, UserChanges, UserFilter};
