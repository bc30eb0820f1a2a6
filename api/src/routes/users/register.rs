use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::RegisterRequest;
use crate::handlers::{decode_body, ApiError, RequestContext};

use sd_core::repositories::{OrderRepository, UserRepository};
use sd_core::services::PasswordHasher;

/// Handler for POST /users
///
/// Registers a new user and returns its profile.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Alice",
///     "email": "alice@example.com",
///     "password": "secret123",
///     "age": 30
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "id": 1,
///     "name": "Alice",
///     "email": "alice@example.com",
///     "age": 30
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Malformed JSON or email already registered
/// - 422 Unprocessable Entity: Missing or invalid fields
pub async fn register<U, O, H>(
    ctx: RequestContext,
    state: web::Data<AppState<U, O, H>>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    H: PasswordHasher + 'static,
{
    let input = decode_body::<RegisterRequest>(&body)
        .and_then(RegisterRequest::into_input)
        .map_err(|e| ctx.fail(e))?;

    let profile = state
        .user_service
        .register(input)
        .await
        .map_err(|e| ctx.fail(e))?;

    log::info!("[{}] Registered user {}", ctx.request_id, profile.id);
    Ok(HttpResponse::Created().json(profile))
}
