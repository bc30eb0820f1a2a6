use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::CreateOrderRequest;
use crate::handlers::{decode_body, parse_id, ApiError, RequestContext};

use sd_core::repositories::{OrderRepository, UserRepository};
use sd_core::services::PasswordHasher;

/// Handler for POST /users/{id}/orders
///
/// # Request Body
///
/// ```json
/// {
///     "product": "Laptop",
///     "quantity": 1,
///     "price": 1200.50
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "id": 1,
///     "user_id": 1,
///     "product": "Laptop",
///     "quantity": 1,
///     "price": 1200.5,
///     "created_at": "2024-01-01T12:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Bad `id` or malformed JSON
/// - 404 Not Found: No such user
/// - 422 Unprocessable Entity: Missing or invalid fields
pub async fn create<U, O, H>(
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
    let user_id = parse_id(&path).map_err(|e| ctx.fail(e))?;
    let input = decode_body::<CreateOrderRequest>(&body)
        .and_then(CreateOrderRequest::into_input)
        .map_err(|e| ctx.fail(e))?;

    state
        .user_service
        .get(user_id)
        .await
        .map_err(|e| ctx.fail(e))?;

    let order = state
        .order_service
        .create(user_id, input)
        .await
        .map_err(|e| ctx.fail(e))?;

    Ok(HttpResponse::Created().json(order))
}
