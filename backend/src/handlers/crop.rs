//! HTTP handlers for crop catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use shared::CropProfile;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Crop listing response
#[derive(Debug, Serialize)]
pub struct CropListResponse {
    pub crops: Vec<String>,
}

/// List the identifiers of all available crops
pub async fn list_crops(State(state): State<AppState>) -> Json<CropListResponse> {
    Json(CropListResponse {
        crops: state.catalog.ids(),
    })
}

/// Get detailed information about a specific crop
pub async fn get_crop_details(
    State(state): State<AppState>,
    Path(crop_id): Path<String>,
) -> AppResult<Json<CropProfile>> {
    let profile = state
        .catalog
        .get(&crop_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Crop".to_string()))?;
    Ok(Json(profile))
}
