use crate::{
    dto::orders::{OrderList, UpdateOrderStatusRequest},
    error::{AppError, AppResult},
    models::{Order, OrderStatus},
    response::{ApiResponse, Meta},
    routes::params::OrderListQuery,
    state::AppState,
};

const ORDER_PAGE_SIZE: i64 = 20;

pub async fn list_all_orders(
    state: &AppState,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let status = match query.status.as_deref().filter(|s| !s.is_empty() && *s != "all") {
        Some(status) => Some(parse_status(status)?),
        None => None,
    };

    let orders = state.orders.read().await;
    let mut items = filter_orders(orders.orders(), query.q.as_deref(), status);
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let (items, meta) = query.pagination().apply(items, ORDER_PAGE_SIZE);
    Ok(ApiResponse::success("Ok", OrderList { items }, Some(meta)))
}

/// Search over id, customer name and email, then an optional status match.
pub fn filter_orders(orders: &[Order], search: Option<&str>, status: Option<OrderStatus>) -> Vec<Order> {
    let needle = search.unwrap_or_default().trim().to_lowercase();
    orders
        .iter()
        .filter(|order| {
            order.id.to_lowercase().contains(&needle)
                || order.customer_name.to_lowercase().contains(&needle)
                || order.customer_email.to_lowercase().contains(&needle)
        })
        .filter(|order| status.is_none_or(|s| order.status == s))
        .cloned()
        .collect()
}

pub async fn get_order_admin(state: &AppState, id: &str) -> AppResult<ApiResponse<Order>> {
    let orders = state.orders.read().await;
    let order = orders.get(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("OK", order, Some(Meta::empty())))
}

pub async fn update_order_status(
    state: &AppState,
    id: &str,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<Order>> {
    let status = parse_status(&payload.status)?;

    let mut orders = state.orders.write().await;
    let order = orders
        .set_status(id, status)
        .cloned()
        .ok_or(AppError::NotFound)?;

    tracing::info!(order_id = %order.id, status = %order.status, "order status updated");

    Ok(ApiResponse::success(
        "Order status updated",
        order,
        Some(Meta::empty()),
    ))
}

fn parse_status(status: &str) -> Result<OrderStatus, AppError> {
    status
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid order status".into()))
}
