use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};

use crate::{
    dto::devices::DeviceList,
    error::AppResult,
    models::Device,
    response::ApiResponse,
    services::device_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_devices).post(add_device))
        .route("/{id}", put(update_device).delete(remove_device))
}

#[utoipa::path(
    get,
    path = "/api/devices",
    responses(
        (status = 200, description = "Connected devices", body = ApiResponse<DeviceList>)
    ),
    tag = "Devices"
)]
pub async fn list_devices(State(state): State<AppState>) -> AppResult<Json<ApiResponse<DeviceList>>> {
    let resp = device_service::list_devices(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/devices",
    request_body = Device,
    responses(
        (status = 200, description = "Device registered", body = ApiResponse<Device>),
        (status = 400, description = "Invalid or duplicate device"),
    ),
    tag = "Devices"
)]
pub async fn add_device(
    State(state): State<AppState>,
    Json(device): Json<Device>,
) -> AppResult<Json<ApiResponse<Device>>> {
    let resp = device_service::add_device(&state, device).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/devices/{id}",
    params(
        ("id" = String, Path, description = "Device ID")
    ),
    request_body = Device,
    responses(
        (status = 200, description = "Device replaced", body = ApiResponse<Device>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Devices"
)]
pub async fn update_device(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(device): Json<Device>,
) -> AppResult<Json<ApiResponse<Device>>> {
    let resp = device_service::update_device(&state, &id, device).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/devices/{id}",
    params(
        ("id" = String, Path, description = "Device ID")
    ),
    responses(
        (status = 200, description = "Device removed", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Devices"
)]
pub async fn remove_device(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = device_service::remove_device(&state, &id).await?;
    Ok(Json(resp))
}
