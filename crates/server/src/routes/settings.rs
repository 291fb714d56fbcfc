use axum::{extract::State, Json};
use tracing::info;

use models::{Settings, SettingsBase};

use crate::{errors::JsonApiError, routes::AppState};

#[utoipa::path(
    get, path = "/settings", tag = "settings",
    responses(
        (status = 200, description = "Stored settings, or the defaults if none were saved", body = crate::openapi::SettingsDoc),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get(State(state): State<AppState>) -> Result<Json<Settings>, JsonApiError> {
    Ok(Json(state.store.get_settings().await?))
}

#[utoipa::path(
    put, path = "/settings", tag = "settings",
    request_body = crate::openapi::SettingsBaseDoc,
    responses(
        (status = 200, description = "Saved", body = crate::openapi::SettingsDoc),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(State(state): State<AppState>, Json(input): Json<SettingsBase>) -> Result<Json<Settings>, JsonApiError> {
    let saved = state.store.upsert_settings(input).await?;
    info!(categories = saved.base.categories.len(), purities = saved.base.purities.len(), "saved settings");
    Ok(Json(saved))
}
