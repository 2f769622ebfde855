use crate::{
    dto::preferences::ThemeData,
    error::AppResult,
    models::Theme,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn get_theme(state: &AppState) -> AppResult<ApiResponse<ThemeData>> {
    let theme = state.preferences.theme();
    Ok(ApiResponse::success("Theme", ThemeData { theme }, Some(Meta::empty())))
}

pub async fn set_theme(state: &AppState, theme: Theme) -> AppResult<ApiResponse<ThemeData>> {
    state.preferences.set_theme(theme)?;
    tracing::debug!(theme = theme.as_str(), "theme set");
    Ok(ApiResponse::success("Theme updated", ThemeData { theme }, Some(Meta::empty())))
}

pub async fn toggle_theme(state: &AppState) -> AppResult<ApiResponse<ThemeData>> {
    let theme = state.preferences.toggle_theme()?;
    tracing::debug!(theme = theme.as_str(), "theme toggled");
    Ok(ApiResponse::success("Theme updated", ThemeData { theme }, Some(Meta::empty())))
}
