use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::handlers::{parse_id, ApiError, RequestContext};

use sd_core::repositories::{OrderRepository, UserRepository};
use sd_core::services::PasswordHasher;

/// Handler for GET /users/{id}/orders
///
/// Newest first. An unknown user simply has no orders.
pub async fn list<U, O, H>(
    ctx: RequestContext,
    state: web::Data<AppState<U, O, H>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    H: PasswordHasher + 'static,
{
    let user_id = parse_id(&path).map_err(|e| ctx.fail(e))?;

    let orders = state
        .order_service
        .list_by_user(user_id)
        .await
        .map_err(|e| ctx.fail(e))?;

    Ok(HttpResponse::Ok().json(orders))
}
