//! Query string parameters for the user listing

use std::collections::HashMap;
use std::str::FromStr;

use actix_web::web;

use sd_core::domain::value_objects::UserFilter;
use sd_core::errors::{DomainError, ValidationError};
use sd_shared::types::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE};
use sd_shared::types::Pagination;

/// Parse `page`, `limit`, `min_age` and `max_age` into a listing filter.
/// Unknown parameters are ignored; empty values count as absent.
pub fn parse_user_filter(query: &str) -> Result<UserFilter, DomainError> {
    let params = web::Query::<HashMap<String, String>>::from_query(query)
        .map_err(|_| invalid("query"))?
        .into_inner();

    let page = positive(&params, "page")?.unwrap_or(DEFAULT_PAGE);
    let limit = positive(&params, "limit")?.unwrap_or(DEFAULT_LIMIT);
    let min_age = non_negative(&params, "min_age")?;
    let max_age = non_negative(&params, "max_age")?;

    Ok(UserFilter {
        min_age,
        max_age,
        pagination: Pagination::new(page, limit),
    })
}

fn raw<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn parse<T: FromStr>(params: &HashMap<String, String>, key: &str) -> Result<Option<T>, DomainError> {
    raw(params, key)
        .map(|v| v.parse::<T>().map_err(|_| invalid(key)))
        .transpose()
}

fn positive(params: &HashMap<String, String>, key: &str) -> Result<Option<u32>, DomainError> {
    match parse::<i64>(params, key)? {
        None => Ok(None),
        Some(v) if v >= 1 => u32::try_from(v).map(Some).map_err(|_| invalid(key)),
        Some(_) => Err(invalid(key)),
    }
}

fn non_negative(params: &HashMap<String, String>, key: &str) -> Result<Option<i32>, DomainError> {
    match parse::<i32>(params, key)? {
        Some(v) if v < 0 => Err(invalid(key)),
        other => Ok(other),
    }
}

fn invalid(param: &str) -> DomainError {
    ValidationError::InvalidQuery {
        param: param.to_string(),
    }
    .into()
}
