//! Request body and path validation
//!
//! Bodies are read as raw bytes so a decoding failure (400) can be told apart
//! from a constraint failure (422) and rendered in the client's language.

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use sd_core::errors::{DomainError, FieldViolation, ValidationError};
use sd_shared::types::Language;

use crate::i18n::message_with;

/// Parse a path segment as a positive user id
pub fn parse_id(raw: &str) -> Result<i64, DomainError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ValidationError::InvalidId.into())
}

/// Decode a JSON body and check its declared constraints
pub fn decode_body<T>(body: &[u8]) -> Result<T, DomainError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_slice(body).map_err(|e| ValidationError::MalformedBody {
        reason: e.to_string(),
    })?;

    value
        .validate()
        .map_err(|errors| ValidationError::Fields(collect_violations(&errors)))?;

    Ok(value)
}

/// One violation per failing field, ordered by field name
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            let error = errs.first()?;
            let rule = error.code.to_string();
            let param = rule_param(&rule, error);
            Some(FieldViolation::new(field.to_string(), rule, param))
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

fn rule_param(rule: &str, error: &validator::ValidationError) -> Option<String> {
    [rule, "exclusive_min", "min"]
        .iter()
        .find_map(|key| error.params.get(*key))
        .map(param_text)
}

fn param_text(value: &Value) -> String {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && n.is_f64() => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Localized text for a field violation
pub fn violation_message(violation: &FieldViolation, lang: Language) -> String {
    let param = violation.param.as_deref().unwrap_or_default();
    let params = [
        ("field", violation.field.as_str()),
        ("param", param),
        ("rule", violation.rule.as_str()),
    ];

    match violation.rule.as_str() {
        "required" => message_with("field_required", lang, &params),
        "email" => message_with("field_email", lang, &params),
        "min" => message_with("field_min", lang, &params),
        "gt" => message_with("field_gt", lang, &params),
        _ => message_with("field_default", lang, &params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Sample {
        #[validate(required, length(min = 2, code = "min"))]
        name: Option<String>,
        #[validate(required, email)]
        email: Option<String>,
        #[validate(required, range(exclusive_min = 0, code = "gt"))]
        age: Option<i32>,
        #[validate(range(exclusive_min = 0.0, code = "gt"))]
        price: Option<f64>,
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Ok(42));
        assert!(parse_id("0").is_err());
        assert!(parse_id("-3").is_err());
        assert!(parse_id("abc").is_err());
        assert!(parse_id("").is_err());
    }

    #[test]
    fn test_malformed_body() {
        let result = decode_body::<Sample>(b"{not json");
        assert!(matches!(
            result,
            Err(DomainError::ValidationErr(ValidationError::MalformedBody { .. }))
        ));

        let result = decode_body::<Sample>(br#"{"age": "thirty"}"#);
        assert!(matches!(
            result,
            Err(DomainError::ValidationErr(ValidationError::MalformedBody { .. }))
        ));
    }

    #[test]
    fn test_violations_sorted_and_parameterized() {
        let result = decode_body::<Sample>(br#"{"name": "A", "email": "nope", "age": 0, "price": -1}"#);

        let Err(DomainError::ValidationErr(ValidationError::Fields(violations))) = result else {
            panic!("expected field violations, got {:?}", result);
        };

        assert_eq!(
            violations,
            vec![
                FieldViolation::new("age", "gt", Some("0".into())),
                FieldViolation::new("email", "email", None),
                FieldViolation::new("name", "min", Some("2".into())),
                FieldViolation::new("price", "gt", Some("0".into())),
            ]
        );
    }

    #[test]
    fn test_missing_fields_are_required() {
        let result = decode_body::<Sample>(b"{}");
        let Err(DomainError::ValidationErr(ValidationError::Fields(violations))) = result else {
            panic!("expected field violations");
        };

        let rules: Vec<(&str, &str)> = violations
            .iter()
            .map(|v| (v.field.as_str(), v.rule.as_str()))
            .collect();
        assert_eq!(
            rules,
            vec![("age", "required"), ("email", "required"), ("name", "required")]
        );
    }

    #[test]
    fn test_violation_messages() {
        let min = FieldViolation::new("name", "min", Some("2".into()));
        assert_eq!(
            violation_message(&min, Language::English),
            "field 'name' must contain at least 2 characters"
        );
        assert_eq!(
            violation_message(&min, Language::Russian),
            "Поле 'name' должно содержать минимум 2 символов"
        );

        let other = FieldViolation::new("name", "max", None);
        assert_eq!(
            violation_message(&other, Language::English),
            "field 'name' failed check 'max'"
        );
    }
}
