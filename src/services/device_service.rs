use crate::{
    dto::devices::DeviceList,
    error::{AppError, AppResult},
    models::Device,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_devices(state: &AppState) -> AppResult<ApiResponse<DeviceList>> {
    let store = state.store.read().await;
    let items = store.devices().to_vec();
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Devices", DeviceList { items }, Some(meta)))
}

pub async fn add_device(state: &AppState, device: Device) -> AppResult<ApiResponse<Device>> {
    if device.id.trim().is_empty() {
        return Err(AppError::BadRequest("device id is required".into()));
    }
    if device.signal_strength > 100 || device.battery_level.is_some_and(|b| b > 100) {
        return Err(AppError::BadRequest("percentages must be within 0..=100".into()));
    }

    let mut store = state.store.write().await;
    if store.device(&device.id).is_some() {
        return Err(AppError::BadRequest("device already registered".into()));
    }
    store.add_device(device.clone());
    tracing::info!(device_id = %device.id, "device added");

    Ok(ApiResponse::success("Device added", device, Some(Meta::empty())))
}

pub async fn update_device(
    state: &AppState,
    id: &str,
    mut device: Device,
) -> AppResult<ApiResponse<Device>> {
    device.id = id.to_string();
    let mut store = state.store.write().await;
    if !store.update_device(device.clone()) {
        return Err(AppError::NotFound);
    }
    tracing::debug!(device_id = id, connected = device.connected, "device updated");

    Ok(ApiResponse::success("Device updated", device, Some(Meta::empty())))
}

pub async fn remove_device(state: &AppState, id: &str) -> AppResult<ApiResponse<serde_json::Value>> {
    let mut store = state.store.write().await;
    if !store.remove_device(id) {
        return Err(AppError::NotFound);
    }
    tracing::info!(device_id = id, "device removed");

    Ok(ApiResponse::success(
        "Device removed",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
