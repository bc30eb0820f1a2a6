use actix_web::{web, HttpRequest, HttpResponse};

use crate::app::AppState;
use crate::dto::UserListResponse;
use crate::handlers::{parse_user_filter, ApiError, RequestContext};

use sd_core::repositories::{OrderRepository, UserRepository};
use sd_core::services::PasswordHasher;

/// Handler for GET /users
///
/// # Query Parameters
/// - `page` (default 1), `limit` (default 10): positive integers
/// - `min_age`, `max_age`: inclusive, non-negative
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "page": 1,
///     "limit": 10,
///     "total": 1,
///     "users": [{ "id": 1, "name": "Alice", "email": "alice@example.com", "age": 30 }]
/// }
/// ```
///
/// `total` counts every matching user, not just the current page.
pub async fn list<U, O, H>(
    req: HttpRequest,
    ctx: RequestContext,
    state: web::Data<AppState<U, O, H>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    H: PasswordHasher + 'static,
{
    let filter = parse_user_filter(req.query_string()).map_err(|e| ctx.fail(e))?;

    let users = state
        .user_service
        .list(&filter)
        .await
        .map_err(|e| ctx.fail(e))?;
    let total = state
        .user_service
        .count(&filter)
        .await
        .map_err(|e| ctx.fail(e))?;

    Ok(HttpResponse::Ok().json(UserListResponse {
        page: filter.pagination.page,
        limit: filter.pagination.limit,
        total,
        users,
    }))
}
