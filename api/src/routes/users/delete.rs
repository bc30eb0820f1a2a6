use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::handlers::{parse_id, ApiError, RequestContext};
use crate::middleware::AuthContext;

use sd_core::repositories::{OrderRepository, UserRepository};
use sd_core::services::PasswordHasher;

/// Handler for DELETE /users/{id}
///
/// Removes the user and their orders. When callers delete their own
/// account the token they presented is revoked.
///
/// # Response
///
/// ## Success (204 No Content)
///
/// ## Errors
/// - 400 Bad Request: `id` is not a positive integer
/// - 404 Not Found: No such user
pub async fn delete<U, O, H>(
    ctx: RequestContext,
    state: web::Data<AppState<U, O, H>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    H: PasswordHasher + 'static,
{
    let id = parse_id(&path).map_err(|e| ctx.fail(e))?;

    state
        .user_service
        .delete(id, &auth.caller())
        .await
        .map_err(|e| ctx.fail(e))?;

    log::info!("[{}] User {} deleted by {}", ctx.request_id, id, auth.user_id);
    Ok(HttpResponse::NoContent().finish())
}
