pub mod error;
pub mod params;
pub mod validation;

pub use error::{not_found, status_for, ApiError, ApiErrorKind, RequestContext};
pub use params::parse_user_filter;
pub use validation::{decode_body, parse_id};
