//! Suitability evaluation service

use shared::{score_suitability, CropProfile, SuitabilityReport, WeatherDay};

use crate::error::{AppError, AppResult};

/// Score a crop against a weather series, mapping scoring failures onto
/// the application error space
pub fn evaluate(profile: &CropProfile, series: &[WeatherDay]) -> AppResult<SuitabilityReport> {
    score_suitability(profile, series).map_err(|message| AppError::Validation {
        field: "weather".to_string(),
        message: message.to_string(),
    })
}
