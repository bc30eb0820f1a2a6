//! Request and response bodies

pub mod order;
pub mod user;

pub use order::CreateOrderRequest;
pub use user::{LoginRequest, RegisterRequest, TokenResponse, UpdateUserRequest, UserListResponse};

use serde::{Deserialize, Deserializer};

/// Reads an optional string, treating `""` the same as an absent field
pub(crate) fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|value| !value.is_empty()))
}
