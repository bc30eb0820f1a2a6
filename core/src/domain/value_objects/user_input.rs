//! Validated inputs for user operations.

use sd_shared::types::Pagination;

/// Registration data. The password is plain text and only lives until hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: i32,
}

/// Partial update: `None` leaves the stored value unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }
}

/// Age range and page selection for user listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Inclusive lower age bound
    pub min_age: Option<i32>,
    /// Inclusive upper age bound
    pub max_age: Option<i32>,
    pub pagination: Pagination,
}

impl UserFilter {
    /// Whether `age` falls inside the configured bounds
    pub fn matches_age(&self, age: i32) -> bool {
        self.min_age.map_or(true, |min| age >= min) && self.max_age.map_or(true, |max| age <= max)
    }
}
