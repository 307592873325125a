//! Weather synthesis service
//!
//! Validated entry point over the pure synthesizer in `shared::synthesis`.
//! No live weather provider is consulted; the series is simulated from the
//! coordinate alone, anchored at today's date.

use chrono::Utc;
use shared::{synthesis, validation, WeatherDay};

use crate::error::{AppError, AppResult};

/// Synthesize a daily weather series for a coordinate, most recent day first
pub fn synthesize(latitude: f64, longitude: f64, day_count: i64) -> AppResult<Vec<WeatherDay>> {
    validation::validate_latitude(latitude).map_err(|message| AppError::Validation {
        field: "latitude".to_string(),
        message: message.to_string(),
    })?;
    validation::validate_longitude(longitude).map_err(|message| AppError::Validation {
        field: "longitude".to_string(),
        message: message.to_string(),
    })?;
    validation::validate_day_count(day_count).map_err(|message| AppError::Validation {
        field: "days".to_string(),
        message: message.to_string(),
    })?;

    let day_count = u32::try_from(day_count).map_err(|_| AppError::Validation {
        field: "days".to_string(),
        message: "Day count is too large".to_string(),
    })?;

    let today = Utc::now().date_naive();
    let series = synthesis::synthesize_from(today, latitude, longitude, day_count);

    // The synthesizer cannot come back empty for a validated request, but a
    // report must never be built from nothing.
    if series.is_empty() {
        return Err(AppError::WeatherUnavailable);
    }

    Ok(series)
}
