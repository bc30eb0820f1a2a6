use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::handlers::{parse_id, ApiError, RequestContext};

use sd_core::repositories::{OrderRepository, UserRepository};
use sd_core::services::PasswordHasher;

/// Handler for GET /users/{id}
///
/// ## Errors
/// - 400 Bad Request: `id` is not a positive integer
/// - 404 Not Found: No such user
pub async fn get<U, O, H>(
    ctx: RequestContext,
    state: web::Data<AppState<U, O, H>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    H: PasswordHasher + 'static,
{
    let id = parse_id(&path).map_err(|e| ctx.fail(e))?;

    let profile = state.user_service.get(id).await.map_err(|e| ctx.fail(e))?;

    Ok(HttpResponse::Ok().json(profile))
}
