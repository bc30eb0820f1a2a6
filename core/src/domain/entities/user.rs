//! User entity representing a registered customer account.

use serde::{Deserialize, Serialize};

/// Stored user record
///
/// The password hash never leaves the domain layer; handlers only ever see
/// [`UserProfile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Unique login email
    pub email: String,

    /// Age in years, always positive
    pub age: i32,

    /// bcrypt digest of the password
    pub password_hash: String,
}

impl User {
    /// Externally visible projection of this user
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            age: self.age,
        }
    }
}

/// Data required to insert a new user; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub password_hash: String,
}

/// Public view of a user, safe to serialize in responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            age: user.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 7,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            age: 30,
            password_hash: "$2b$04$hash".to_string(),
        }
    }

    #[test]
    fn test_profile_projection() {
        let user = sample_user();
        let profile = user.profile();

        assert_eq!(profile.id, 7);
        assert_eq!(profile.name, "Alice");
        assert_eq!(profile, UserProfile::from(user));
    }

    #[test]
    fn test_profile_serialization_omits_password() {
        let json = serde_json::to_value(sample_user().profile()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "name": "Alice",
                "email": "alice@example.com",
                "age": 30
            })
        );
        assert!(json.get("password_hash").is_none());
    }
}
