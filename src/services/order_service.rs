use chrono::Utc;

use crate::{
    dto::orders::CheckoutRequest,
    error::{AppError, AppResult},
    models::Order,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Turn the cart into a pending order and empty the cart.
pub async fn checkout(state: &AppState, payload: CheckoutRequest) -> AppResult<ApiResponse<Order>> {
    let customer_name = payload.customer_name.trim().to_string();
    let customer_email = payload.customer_email.trim().to_string();
    if customer_name.is_empty() {
        return Err(AppError::BadRequest("customer_name is required".into()));
    }
    if !customer_email.contains('@') {
        return Err(AppError::BadRequest("customer_email is invalid".into()));
    }

    // Store before orders, everywhere both are held.
    let mut store = state.store.write().await;
    if store.cart().is_empty() {
        return Err(AppError::BadRequest("cart is empty".into()));
    }
    let mut orders = state.orders.write().await;
    let order = orders.place(
        customer_name,
        customer_email,
        payload.shipping_address,
        store.cart(),
        Utc::now().date_naive(),
    );
    store.clear_cart();

    tracing::info!(order_id = %order.id, total = %order.total, "order placed");

    Ok(ApiResponse::success(
        "Order placed",
        order,
        Some(Meta::empty()),
    ))
}
