use serde::{Deserialize, Serialize};
use validator::Validate;

use sd_core::domain::entities::user::UserProfile;
use sd_core::domain::value_objects::{NewUserInput, UserChanges};
use sd_core::errors::{DomainError, FieldViolation, ValidationError};

use super::non_empty;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "non_empty")]
    #[validate(required, length(min = 2, code = "min"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "non_empty")]
    #[validate(required, email)]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "non_empty")]
    #[validate(required, length(min = 6, code = "min"))]
    pub password: Option<String>,

    #[validate(required, range(exclusive_min = 0, code = "gt"))]
    pub age: Option<i32>,
}

impl RegisterRequest {
    /// Convert a validated request into service input
    pub fn into_input(self) -> Result<NewUserInput, DomainError> {
        match (self.name, self.email, self.password, self.age) {
            (Some(name), Some(email), Some(password), Some(age)) => Ok(NewUserInput {
                name,
                email,
                password,
                age,
            }),
            (name, email, password, age) => Err(missing(&[
                ("age", age.is_none()),
                ("email", email.is_none()),
                ("name", name.is_none()),
                ("password", password.is_none()),
            ])),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "non_empty")]
    #[validate(required, email)]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "non_empty")]
    #[validate(required)]
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn into_credentials(self) -> Result<(String, String), DomainError> {
        match (self.email, self.password) {
            (Some(email), Some(password)) => Ok((email, password)),
            (email, password) => Err(missing(&[
                ("email", email.is_none()),
                ("password", password.is_none()),
            ])),
        }
    }
}

/// Partial update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, code = "min"))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(range(exclusive_min = 0, code = "gt"))]
    pub age: Option<i32>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            age: request.age,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub users: Vec<UserProfile>,
}

fn missing(fields: &[(&str, bool)]) -> DomainError {
    ValidationError::Fields(
        fields
            .iter()
            .filter(|(_, absent)| *absent)
            .map(|(field, _)| FieldViolation::new(*field, "required", None))
            .collect(),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::decode_body;

    #[test]
    fn test_register_request_valid() {
        let request: RegisterRequest = decode_body(
            br#"{"name":"Alice","email":"alice@example.com","password":"secret123","age":30}"#,
        )
        .unwrap();

        let input = request.into_input().unwrap();
        assert_eq!(input.name, "Alice");
        assert_eq!(input.age, 30);
    }

    #[test]
    fn test_register_request_rules() {
        let result = decode_body::<RegisterRequest>(
            br#"{"name":"A","email":"not-an-email","password":"123","age":-1}"#,
        );

        let Err(DomainError::ValidationErr(ValidationError::Fields(violations))) = result else {
            panic!("expected field violations");
        };
        let rules: Vec<(&str, &str)> = violations
            .iter()
            .map(|v| (v.field.as_str(), v.rule.as_str()))
            .collect();
        assert_eq!(
            rules,
            vec![("age", "gt"), ("email", "email"), ("name", "min"), ("password", "min")]
        );
    }

    #[test]
    fn test_into_input_reports_missing() {
        let request = RegisterRequest {
            name: Some("Alice".into()),
            email: None,
            password: Some("secret123".into()),
            age: None,
        };

        let Err(DomainError::ValidationErr(ValidationError::Fields(violations))) =
            request.into_input()
        else {
            panic!("expected field violations");
        };
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["age", "email"]);
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let result = decode_body::<RegisterRequest>(
            br#"{"name":"","email":"","password":"","age":30}"#,
        );

        let Err(DomainError::ValidationErr(ValidationError::Fields(violations))) = result else {
            panic!("expected field violations");
        };
        assert_eq!(
            violations,
            vec![
                FieldViolation::new("email", "required", None),
                FieldViolation::new("name", "required", None),
                FieldViolation::new("password", "required", None),
            ]
        );
    }

    #[test]
    fn test_update_request_allows_empty() {
        let request: UpdateUserRequest = decode_body(b"{}").unwrap();
        assert!(UserChanges::from(request).is_empty());

        assert!(decode_body::<UpdateUserRequest>(br#"{"age":0}"#).is_err());
    }

    #[test]
    fn test_login_request_requires_both() {
        assert!(decode_body::<LoginRequest>(br#"{"email":"a@example.com"}"#).is_err());
        assert!(decode_body::<LoginRequest>(br#"{"email":"a@example.com","password":""}"#).is_err());

        let request: LoginRequest =
            decode_body(br#"{"email":"a@example.com","password":"x"}"#).unwrap();
        assert_eq!(
            request.into_credentials().unwrap(),
            ("a@example.com".to_string(), "x".to_string())
        );
    }
}
