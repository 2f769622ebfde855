use axum::{
    Json, Router,
    extract::State,
    routing::post,
};

use crate::{
    dto::orders::CheckoutRequest,
    error::AppResult,
    models::Order,
    response::ApiResponse,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/checkout", post(checkout))
}

#[utoipa::path(
    post,
    path = "/api/orders/checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Pending order created from the cart", body = ApiResponse<Order>),
        (status = 400, description = "Empty cart or invalid customer"),
    ),
    tag = "Orders"
)]
pub async fn checkout(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::checkout(&state, payload).await?;
    Ok(Json(resp))
}
