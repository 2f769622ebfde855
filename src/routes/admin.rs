use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch, put},
};

use crate::{
    dto::{
        analytics::{AnalyticsData, CustomerList},
        orders::{OrderList, UpdateOrderStatusRequest},
        products::{CreateProductRequest, ProductList, UpdateProductRequest},
    },
    error::AppResult,
    models::{Order, Product},
    response::ApiResponse,
    routes::params::{AdminProductQuery, OrderListQuery},
    services::{admin_service, analytics_service, product_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", put(update_product).delete(delete_product))
        .route("/orders", get(list_all_orders))
        .route("/orders/{id}", get(get_order_admin))
        .route("/orders/{id}/status", patch(update_order_status))
        .route("/customers", get(list_customers))
        .route("/analytics", get(analytics))
}

#[utoipa::path(
    get,
    path = "/api/admin/products",
    params(
        ("q" = Option<String>, Query, description = "Match title or category"),
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "Catalog for the product manager", body = ApiResponse<ProductList>)
    ),
    tag = "Admin"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<AdminProductQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = product_service::admin_list_products(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Create product", body = ApiResponse<Product>),
        (status = 400, description = "Invalid product"),
    ),
    tag = "Admin"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::create_product(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = ApiResponse<Product>),
        (status = 400, description = "Invalid product"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Admin"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProductRequest>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::update_product(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted product", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Admin"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = product_service::delete_product(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    params(
        ("q" = Option<String>, Query, description = "Match order id, customer name or email"),
        ("status" = Option<String>, Query, description = "Filter by status, `all` for any"),
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "Orders, newest first", body = ApiResponse<OrderList>),
        (status = 400, description = "Invalid status"),
    ),
    tag = "Admin"
)]
pub async fn list_all_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = admin_service::list_all_orders(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders/{id}",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order with items", body = ApiResponse<Order>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Admin"
)]
pub async fn get_order_admin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = admin_service::get_order_admin(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/admin/orders/{id}/status",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Update order status", body = ApiResponse<Order>),
        (status = 400, description = "Invalid status"),
        (status = 404, description = "Not Found"),
    ),
    tag = "Admin"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = admin_service::update_order_status(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/customers",
    responses(
        (status = 200, description = "Customers", body = ApiResponse<CustomerList>)
    ),
    tag = "Admin"
)]
pub async fn list_customers(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CustomerList>>> {
    let resp = analytics_service::list_customers(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/analytics",
    responses(
        (status = 200, description = "Dashboard figures derived from the order book", body = ApiResponse<AnalyticsData>)
    ),
    tag = "Admin"
)]
pub async fn analytics(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<AnalyticsData>>> {
    let resp = analytics_service::analytics(&state).await?;
    Ok(Json(resp))
}
