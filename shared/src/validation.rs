//! Validation utilities for the CropCast Crop Suitability Platform

use crate::models::CropProfile;

// ============================================================================
// Coordinate and Request Validations
// ============================================================================

/// Validate a latitude in degrees
pub fn validate_latitude(latitude: f64) -> Result<(), &'static str> {
    if !latitude.is_finite() {
        return Err("Latitude must be a finite number");
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90");
    }
    Ok(())
}

/// Validate a longitude in degrees
pub fn validate_longitude(longitude: f64) -> Result<(), &'static str> {
    if !longitude.is_finite() {
        return Err("Longitude must be a finite number");
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate a requested weather-series length
pub fn validate_day_count(days: i64) -> Result<(), &'static str> {
    if days < 1 {
        return Err("Day count must be at least 1");
    }
    Ok(())
}

// ============================================================================
// Crop Profile Validations
// ============================================================================

/// Validate the internal consistency of a crop profile:
/// min ≤ optimal ≤ max for every ranged attribute
pub fn validate_crop_profile(profile: &CropProfile) -> Result<(), String> {
    if profile.name.trim().is_empty() {
        return Err("Crop name is required".to_string());
    }

    check_range(
        "temperature",
        profile.min_temp,
        profile.optimal_temp,
        profile.max_temp,
    )?;
    check_range(
        "rainfall",
        profile.min_rainfall,
        profile.optimal_rainfall,
        profile.max_rainfall,
    )?;
    if profile.min_humidity > profile.max_humidity {
        return Err(format!(
            "humidity range is inverted ({} > {})",
            profile.min_humidity, profile.max_humidity
        ));
    }
    if profile.wind_tolerance < 0.0 {
        return Err("wind tolerance cannot be negative".to_string());
    }
    if profile.growth_period_days == 0 {
        return Err("growth period must be at least one day".to_string());
    }

    Ok(())
}

fn check_range(attribute: &str, min: f64, optimal: f64, max: f64) -> Result<(), String> {
    if min > max {
        return Err(format!("{attribute} range is inverted ({min} > {max})"));
    }
    if optimal < min || optimal > max {
        return Err(format!(
            "optimal {attribute} {optimal} lies outside [{min}, {max}]"
        ));
    }
    Ok(())
}
