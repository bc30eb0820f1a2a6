//! Error shaping for HTTP responses
//!
//! Every failure on the request path ends up as an [`ApiError`]: a domain
//! error (or one of the few transport-level failures) together with the
//! language the client asked for. `ApiError` implements `ResponseError`, so
//! handlers and middleware simply return it.

use std::future::{ready, Ready};

use actix_web::{
    dev::Payload, http::header, http::StatusCode, FromRequest, HttpRequest, HttpResponse,
    ResponseError,
};
use uuid::Uuid;

use sd_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use sd_shared::types::{ErrorResponse, Language, ValidationErrorResponse};

use crate::handlers::validation::violation_message;
use crate::i18n::{message, message_with};

/// Header carrying a caller-supplied request id
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// What went wrong while serving a request
#[derive(Debug, thiserror::Error)]
pub enum ApiErrorKind {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Missing or malformed Authorization header")]
    MissingCredentials,

    #[error("No route matches the request")]
    RouteNotFound,
}

/// Error returned from handlers and middleware, rendered in the client's language
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub lang: Language,
}

impl ApiError {
    pub fn new(kind: impl Into<ApiErrorKind>, lang: Language) -> Self {
        Self {
            kind: kind.into(),
            lang,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.kind {
            ApiErrorKind::Domain(error) => status_for(error),
            ApiErrorKind::MissingCredentials => StatusCode::UNAUTHORIZED,
            ApiErrorKind::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match &self.kind {
            ApiErrorKind::Domain(DomainError::ValidationErr(ValidationError::Fields(violations))) => {
                let errors = violations
                    .iter()
                    .map(|v| violation_message(v, self.lang))
                    .collect();
                HttpResponse::build(status).json(ValidationErrorResponse::new(errors))
            }
            ApiErrorKind::Domain(error) => {
                HttpResponse::build(status).json(ErrorResponse::new(domain_message(error, self.lang)))
            }
            ApiErrorKind::MissingCredentials => HttpResponse::build(status)
                .json(ErrorResponse::new(message("authorization_required", self.lang))),
            ApiErrorKind::RouteNotFound => {
                HttpResponse::build(status).json(ErrorResponse::new(message("not_found", self.lang)))
            }
        }
    }
}

/// Map a domain error to its HTTP status
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,

        DomainError::Auth(AuthError::EmailAlreadyExists) => StatusCode::BAD_REQUEST,
        DomainError::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,

        DomainError::Token(TokenError::SecretNotConfigured)
        | DomainError::Token(TokenError::GenerationFailed) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,

        DomainError::ValidationErr(ValidationError::Fields(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::ValidationErr(_) => StatusCode::BAD_REQUEST,

        DomainError::Internal { .. } | DomainError::Hashing { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Client-facing text for a single-message error. Internal details never
/// reach the client.
pub fn domain_message(error: &DomainError, lang: Language) -> String {
    match error {
        DomainError::NotFound { resource } if resource == "user" => message("user_not_found", lang),
        DomainError::NotFound { .. } => message("not_found", lang),

        DomainError::Auth(AuthError::EmailAlreadyExists) => message("email_already_exists", lang),
        DomainError::Auth(AuthError::InvalidCredentials) => message("invalid_credentials", lang),

        DomainError::Token(TokenError::InvalidClaims) => message("invalid_claims", lang),
        DomainError::Token(TokenError::SecretNotConfigured)
        | DomainError::Token(TokenError::GenerationFailed) => message("internal_error", lang),
        DomainError::Token(_) => message("invalid_token", lang),

        DomainError::ValidationErr(ValidationError::InvalidId) => message("invalid_id", lang),
        DomainError::ValidationErr(ValidationError::InvalidQuery { param }) => {
            match param.as_str() {
                "page" => message("invalid_page", lang),
                "limit" => message("invalid_limit", lang),
                "min_age" => message("invalid_min_age", lang),
                "max_age" => message("invalid_max_age", lang),
                other => message_with("invalid_query", lang, &[("param", other)]),
            }
        }
        DomainError::ValidationErr(ValidationError::MalformedBody { reason }) => {
            message_with("malformed_body", lang, &[("reason", reason)])
        }
        DomainError::ValidationErr(ValidationError::Fields(violations)) => violations
            .iter()
            .map(|v| violation_message(v, lang))
            .collect::<Vec<_>>()
            .join("; "),

        DomainError::Internal { .. } | DomainError::Hashing { .. } => {
            message("internal_error", lang)
        }
    }
}

/// Language preference from the Accept-Language header
pub fn extract_language(req: &HttpRequest) -> Language {
    req.headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(Language::from_accept_language)
        .unwrap_or_default()
}

/// Request id from `X-Request-ID`, or a fresh one
pub fn extract_request_id(req: &HttpRequest) -> String {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Per-request data needed to log and render errors
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub lang: Language,
}

impl RequestContext {
    pub fn from_http_request(req: &HttpRequest) -> Self {
        Self {
            request_id: extract_request_id(req),
            lang: extract_language(req),
        }
    }

    /// Log `error` against this request and wrap it for the response
    pub fn fail(&self, error: impl Into<DomainError>) -> ApiError {
        let error = error.into();
        if error.is_internal() {
            log::error!("[{}] Request failed: {}", self.request_id, error);
        } else {
            log::warn!("[{}] Request rejected: {}", self.request_id, error);
        }
        ApiError::new(error, self.lang)
    }
}

impl FromRequest for RequestContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_http_request(req)))
    }
}

/// Default handler for unmatched routes
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let lang = extract_language(&req);
    log::debug!("No route for {} {}", req.method(), req.path());
    Err(ApiError::new(ApiErrorKind::RouteNotFound, lang))
}
