//! Type definitions shared across the server crates
//!
//! - `language` - Response language negotiation
//! - `pagination` - Page/limit parameters for list endpoints
//! - `response` - JSON error envelopes

pub mod language;
pub mod pagination;
pub mod response;

pub use language::Language;
pub use pagination::Pagination;
pub use response::{ErrorResponse, ValidationErrorResponse};
