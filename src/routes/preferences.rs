use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::preferences::ThemeData,
    error::AppResult,
    response::ApiResponse,
    services::preference_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/theme", get(get_theme).put(set_theme))
        .route("/theme/toggle", post(toggle_theme))
}

#[utoipa::path(
    get,
    path = "/api/preferences/theme",
    responses(
        (status = 200, description = "Stored theme, light by default", body = ApiResponse<ThemeData>)
    ),
    tag = "Preferences"
)]
pub async fn get_theme(State(state): State<AppState>) -> AppResult<Json<ApiResponse<ThemeData>>> {
    let resp = preference_service::get_theme(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/preferences/theme",
    request_body = ThemeData,
    responses(
        (status = 200, description = "Theme stored", body = ApiResponse<ThemeData>)
    ),
    tag = "Preferences"
)]
pub async fn set_theme(
    State(state): State<AppState>,
    Json(payload): Json<ThemeData>,
) -> AppResult<Json<ApiResponse<ThemeData>>> {
    let resp = preference_service::set_theme(&state, payload.theme).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/preferences/theme/toggle",
    responses(
        (status = 200, description = "Theme flipped and stored", body = ApiResponse<ThemeData>)
    ),
    tag = "Preferences"
)]
pub async fn toggle_theme(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ThemeData>>> {
    let resp = preference_service::toggle_theme(&state).await?;
    Ok(Json(resp))
}
