//! HTTP handlers for weather summary endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::{WeatherDay, WeatherSummary};

use crate::error::{AppError, AppResult};
use crate::services;
use crate::AppState;

/// Query parameters for the weather summary endpoint
#[derive(Debug, Deserialize)]
pub struct WeatherSummaryQuery {
    /// Weather window in days; defaults to the configured summary window
    pub days: Option<i64>,
}

/// Weather summary response: aggregate fields plus the most recent days
#[derive(Debug, Serialize)]
pub struct WeatherSummaryResponse {
    #[serde(flatten)]
    pub summary: WeatherSummary,
    pub recent_data: Vec<WeatherDay>,
}

/// Get a synthesized weather summary for a location
pub async fn get_weather_summary(
    State(state): State<AppState>,
    Path((latitude, longitude)): Path<(f64, f64)>,
    Query(query): Query<WeatherSummaryQuery>,
) -> AppResult<Json<WeatherSummaryResponse>> {
    let days = query.days.unwrap_or(state.config.weather.summary_days);
    let series = services::weather::synthesize(latitude, longitude, days)?;

    let summary = WeatherSummary::from_series(&series).ok_or(AppError::WeatherUnavailable)?;
    let recent_data = series
        .iter()
        .take(state.config.weather.recent_days)
        .cloned()
        .collect();

    Ok(Json(WeatherSummaryResponse {
        summary,
        recent_data,
    }))
}
