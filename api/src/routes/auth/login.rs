use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::{LoginRequest, TokenResponse};
use crate::handlers::{decode_body, ApiError, RequestContext};

use sd_core::repositories::{OrderRepository, UserRepository};
use sd_core::services::PasswordHasher;

/// Handler for POST /auth/login
///
/// Exchanges credentials for a bearer token.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "alice@example.com",
///     "password": "secret123"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Malformed JSON
/// - 401 Unauthorized: Unknown email or wrong password
/// - 422 Unprocessable Entity: Missing or invalid fields
/// - 500 Internal Server Error: Signing secret not configured
pub async fn login<U, O, H>(
    ctx: RequestContext,
    state: web::Data<AppState<U, O, H>>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    H: PasswordHasher + 'static,
{
    let (email, password) = decode_body::<LoginRequest>(&body)
        .and_then(LoginRequest::into_credentials)
        .map_err(|e| ctx.fail(e))?;

    log::info!("[{}] Login attempt", ctx.request_id);

    let token = state
        .user_service
        .authenticate(&email, &password)
        .await
        .map_err(|e| ctx.fail(e))?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}
