use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::UpdateUserRequest;
use crate::handlers::{decode_body, parse_id, ApiError, RequestContext};

use sd_core::repositories::{OrderRepository, UserRepository};
use sd_core::services::PasswordHasher;

/// Handler for PUT /users/{id}
///
/// Partial update: only the fields present in the body change. The password
/// cannot be changed here.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Alice Cooper",
///     "age": 31
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Bad `id`, malformed JSON, or email taken by another user
/// - 404 Not Found: No such user
/// - 422 Unprocessable Entity: Invalid fields
pub async fn update<U, O, H>(
    ctx: RequestContext,
    state: web::Data<AppState<U, O, H>>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    H: PasswordHasher + 'static,
{
    let id = parse_id(&path).map_err(|e| ctx.fail(e))?;
    let request = decode_body::<UpdateUserRequest>(&body).map_err(|e| ctx.fail(e))?;

    let profile = state
        .user_service
        .update(id, request.into())
        .await
        .map_err(|e| ctx.fail(e))?;

    Ok(HttpResponse::Ok().json(profile))
}
