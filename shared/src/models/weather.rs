//! Weather data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Round to one decimal place, the resolution used for all reported
/// weather and score values
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One simulated daily climate record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherDay {
    pub date: NaiveDate,
    /// Air temperature in °C, clamped to [-10, 45]
    pub temperature: f64,
    /// Rainfall in mm, never negative
    pub rainfall: f64,
    /// Relative humidity in %, clamped to [20, 95]
    pub humidity: f64,
    /// Wind speed in km/h, clamped to [0, 50]
    pub wind_speed: f64,
    pub cyclone_risk: bool,
}

/// Aggregate statistics over a weather series, used by suitability scoring
///
/// Mean wind is carried alongside max wind even though only the max feeds
/// the wind score.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherAggregates {
    pub avg_temperature: f64,
    pub avg_rainfall: f64,
    pub avg_humidity: f64,
    pub avg_wind: f64,
    pub max_wind: f64,
    pub cyclone_days: usize,
}

impl WeatherAggregates {
    /// Compute aggregates over a series; `None` when the series is empty
    pub fn from_series(series: &[WeatherDay]) -> Option<Self> {
        if series.is_empty() {
            return None;
        }
        let count = series.len() as f64;

        let avg_temperature = series.iter().map(|d| d.temperature).sum::<f64>() / count;
        let avg_rainfall = series.iter().map(|d| d.rainfall).sum::<f64>() / count;
        let avg_humidity = series.iter().map(|d| d.humidity).sum::<f64>() / count;
        let avg_wind = series.iter().map(|d| d.wind_speed).sum::<f64>() / count;
        let max_wind = series.iter().map(|d| d.wind_speed).fold(0.0, f64::max);
        let cyclone_days = series.iter().filter(|d| d.cyclone_risk).count();

        Some(Self {
            avg_temperature,
            avg_rainfall,
            avg_humidity,
            avg_wind,
            max_wind,
            cyclone_days,
        })
    }
}

/// Boundary reduction of a weather series for API responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSummary {
    pub avg_temperature: f64,
    pub total_rainfall: f64,
    pub avg_humidity: f64,
    pub max_wind: f64,
    pub cyclone_risk_days: usize,
}

impl WeatherSummary {
    /// Summarize a series; `None` when the series is empty
    pub fn from_series(series: &[WeatherDay]) -> Option<Self> {
        let aggregates = WeatherAggregates::from_series(series)?;
        let total_rainfall = series.iter().map(|d| d.rainfall).sum::<f64>();

        Some(Self {
            avg_temperature: round1(aggregates.avg_temperature),
            total_rainfall: round1(total_rainfall),
            avg_humidity: round1(aggregates.avg_humidity),
            max_wind: aggregates.max_wind,
            cyclone_risk_days: aggregates.cyclone_days,
        })
    }
}
