//! HTTP handlers for crop suitability prediction

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use shared::{GpsCoordinates, SuitabilityReport, WeatherSummary};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services;
use crate::AppState;

/// Prediction request payload
#[derive(Debug, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,

    #[validate(length(min = 1, message = "Crop identifier is required"))]
    pub crop: String,

    /// Weather window in days; defaults to the configured prediction window
    #[validate(range(min = 1, message = "Day count must be at least 1"))]
    pub days: Option<i64>,
}

/// Prediction response: the suitability report plus echoed request context
/// and a summary of the weather it was scored against
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub location: GpsCoordinates,
    pub crop: String,
    pub crop_name: String,
    pub prediction: SuitabilityReport,
    pub weather_summary: WeatherSummary,
}

/// Predict crop growth suitability for a location
pub async fn predict(
    State(state): State<AppState>,
    Json(input): Json<PredictRequest>,
) -> AppResult<Json<PredictionResponse>> {
    input
        .validate()
        .map_err(|e| AppError::from_validation(&e))?;

    let profile = state
        .catalog
        .get(&input.crop)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Crop".to_string()))?;

    let days = input.days.unwrap_or(state.config.weather.prediction_days);
    let series = services::weather::synthesize(input.latitude, input.longitude, days)?;

    let prediction = services::suitability::evaluate(&profile, &series)?;
    let weather_summary =
        WeatherSummary::from_series(&series).ok_or(AppError::WeatherUnavailable)?;

    Ok(Json(PredictionResponse {
        location: GpsCoordinates::new(input.latitude, input.longitude),
        crop: input.crop,
        crop_name: profile.name,
        prediction,
        weather_summary,
    }))
}
