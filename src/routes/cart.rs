use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};

use crate::{
    dto::cart::{AddToCartRequest, CartSummary, SetQuantityRequest},
    error::AppResult,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
    store::Cart,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_view).post(add_to_cart).delete(clear_cart))
        .route("/summary", get(cart_summary))
        .route("/{product_id}", put(set_quantity).delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart items with total and item count", body = ApiResponse<Cart>)
    ),
    tag = "Cart"
)]
pub async fn cart_view(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Cart>>> {
    let resp = cart_service::view_cart(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/cart/summary",
    responses(
        (status = 200, description = "Subtotal, shipping, tax and total", body = ApiResponse<CartSummary>)
    ),
    tag = "Cart"
)]
pub async fn cart_summary(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CartSummary>>> {
    let resp = cart_service::cart_summary(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Add units of a product", body = ApiResponse<Cart>),
        (status = 400, description = "Bad quantity or out of stock"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<Cart>>> {
    let resp = cart_service::add_to_cart(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    request_body = SetQuantityRequest,
    responses(
        (status = 200, description = "Quantity replaced, zero or less removes the line", body = ApiResponse<Cart>),
        (status = 404, description = "Cart item not found"),
    ),
    tag = "Cart"
)]
pub async fn set_quantity(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(payload): Json<SetQuantityRequest>,
) -> AppResult<Json<ApiResponse<Cart>>> {
    let resp = cart_service::set_quantity(&state, &product_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "OK", body = ApiResponse<Cart>),
        (status = 404, description = "Cart item not found"),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> AppResult<Json<ApiResponse<Cart>>> {
    let resp = cart_service::remove_from_cart(&state, &product_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart emptied", body = ApiResponse<Cart>)
    ),
    tag = "Cart"
)]
pub async fn clear_cart(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Cart>>> {
    let resp = cart_service::clear_cart(&state).await?;
    Ok(Json(resp))
}
