//! Suitability scoring models and the scoring engine

use serde::{Deserialize, Serialize};

use crate::models::crop::CropProfile;
use crate::models::weather::{round1, WeatherAggregates, WeatherDay};

/// Factor weights for the overall score
const TEMPERATURE_WEIGHT: f64 = 0.3;
const RAINFALL_WEIGHT: f64 = 0.3;
const HUMIDITY_WEIGHT: f64 = 0.2;
const WIND_WEIGHT: f64 = 0.2;

/// Score lost per unit of distance from the optimal value
const TEMPERATURE_FALLOFF: f64 = 5.0;
const RAINFALL_FALLOFF: f64 = 1.0 / 20.0;
const HUMIDITY_FALLOFF: f64 = 2.0;
const WIND_FALLOFF: f64 = 3.0;

/// Qualitative suitability label derived from the overall score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Recommendation {
    #[serde(rename = "Not Suitable")]
    NotSuitable,
    #[serde(rename = "Moderately Suitable")]
    ModeratelySuitable,
    #[serde(rename = "Suitable")]
    Suitable,
    #[serde(rename = "Highly Suitable")]
    HighlySuitable,
}

impl Recommendation {
    /// Map an overall score to its label (inclusive lower bounds)
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            Recommendation::HighlySuitable
        } else if score >= 60.0 {
            Recommendation::Suitable
        } else if score >= 40.0 {
            Recommendation::ModeratelySuitable
        } else {
            Recommendation::NotSuitable
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::HighlySuitable => write!(f, "Highly Suitable"),
            Recommendation::Suitable => write!(f, "Suitable"),
            Recommendation::ModeratelySuitable => write!(f, "Moderately Suitable"),
            Recommendation::NotSuitable => write!(f, "Not Suitable"),
        }
    }
}

/// Per-factor and overall suitability of a crop for a weather series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuitabilityReport {
    pub overall_score: f64,
    pub temperature_score: f64,
    pub rainfall_score: f64,
    pub humidity_score: f64,
    pub wind_score: f64,
    pub cyclone_penalty: u32,
    pub recommendation: Recommendation,
    pub survival_period: String,
    pub risk_factors: Vec<String>,
}

/// Score a crop profile against a weather series
///
/// Fails when the series is empty, since the aggregate statistics are
/// undefined in that case.
pub fn score_suitability(
    profile: &CropProfile,
    series: &[WeatherDay],
) -> Result<SuitabilityReport, &'static str> {
    let aggregates =
        WeatherAggregates::from_series(series).ok_or("weather series must not be empty")?;
    Ok(score_from_aggregates(profile, &aggregates))
}

/// Score a crop profile against precomputed aggregate statistics
pub fn score_from_aggregates(
    profile: &CropProfile,
    aggregates: &WeatherAggregates,
) -> SuitabilityReport {
    let temperature_score = range_score(
        aggregates.avg_temperature,
        profile.min_temp,
        profile.max_temp,
        profile.optimal_temp,
        TEMPERATURE_FALLOFF,
    );
    let rainfall_score = range_score(
        aggregates.avg_rainfall,
        profile.min_rainfall,
        profile.max_rainfall,
        profile.optimal_rainfall,
        RAINFALL_FALLOFF,
    );
    // Humidity has no explicit optimum; the midpoint of the band serves as one.
    let humidity_midpoint = (profile.min_humidity + profile.max_humidity) / 2.0;
    let humidity_score = range_score(
        aggregates.avg_humidity,
        profile.min_humidity,
        profile.max_humidity,
        humidity_midpoint,
        HUMIDITY_FALLOFF,
    );
    let wind_score = wind_score(aggregates.max_wind, profile.wind_tolerance);
    let cyclone_penalty = cyclone_penalty(aggregates.cyclone_days);

    let overall_score = (TEMPERATURE_WEIGHT * temperature_score
        + RAINFALL_WEIGHT * rainfall_score
        + HUMIDITY_WEIGHT * humidity_score
        + WIND_WEIGHT * wind_score
        - f64::from(cyclone_penalty))
    .clamp(0.0, 100.0);

    SuitabilityReport {
        overall_score: round1(overall_score),
        temperature_score: round1(temperature_score),
        rainfall_score: round1(rainfall_score),
        humidity_score: round1(humidity_score),
        wind_score: round1(wind_score),
        cyclone_penalty,
        recommendation: Recommendation::for_score(overall_score),
        survival_period: format!("{} days", profile.growth_period_days),
        risk_factors: risk_factors(profile, aggregates),
    }
}

/// Score a mean value against a [min, max] band with a linear falloff from
/// the reference value; zero outside the band
fn range_score(mean: f64, min: f64, max: f64, reference: f64, falloff: f64) -> f64 {
    if mean < min || mean > max {
        return 0.0;
    }
    (100.0 - falloff * (mean - reference).abs()).max(0.0)
}

/// Full marks up to the tolerance, linear falloff beyond it
fn wind_score(max_wind: f64, tolerance: f64) -> f64 {
    if max_wind <= tolerance {
        100.0
    } else {
        (100.0 - WIND_FALLOFF * (max_wind - tolerance)).max(0.0)
    }
}

fn cyclone_penalty(cyclone_days: usize) -> u32 {
    if cyclone_days > 10 {
        20
    } else if cyclone_days > 5 {
        10
    } else {
        0
    }
}

/// Identify risk factors for crop growth, in stable order:
/// temperature, rainfall, humidity, wind, cyclone
pub fn risk_factors(profile: &CropProfile, aggregates: &WeatherAggregates) -> Vec<String> {
    let mut risks = Vec::new();

    if aggregates.avg_temperature < profile.min_temp {
        risks.push(format!(
            "Temperature too low (avg: {:.1}°C, min required: {}°C)",
            aggregates.avg_temperature, profile.min_temp
        ));
    } else if aggregates.avg_temperature > profile.max_temp {
        risks.push(format!(
            "Temperature too high (avg: {:.1}°C, max allowed: {}°C)",
            aggregates.avg_temperature, profile.max_temp
        ));
    }

    if aggregates.avg_rainfall < profile.min_rainfall {
        risks.push(format!(
            "Insufficient rainfall (avg: {:.1}mm, min required: {}mm)",
            aggregates.avg_rainfall, profile.min_rainfall
        ));
    } else if aggregates.avg_rainfall > profile.max_rainfall {
        risks.push(format!(
            "Excessive rainfall (avg: {:.1}mm, max allowed: {}mm)",
            aggregates.avg_rainfall, profile.max_rainfall
        ));
    }

    if aggregates.avg_humidity < profile.min_humidity {
        risks.push(format!(
            "Low humidity (avg: {:.1}%, min required: {}%)",
            aggregates.avg_humidity, profile.min_humidity
        ));
    } else if aggregates.avg_humidity > profile.max_humidity {
        risks.push(format!(
            "High humidity (avg: {:.1}%, max allowed: {}%)",
            aggregates.avg_humidity, profile.max_humidity
        ));
    }

    if aggregates.max_wind > profile.wind_tolerance {
        risks.push(format!(
            "High wind speeds (max: {:.1} km/h, tolerance: {} km/h)",
            aggregates.max_wind, profile.wind_tolerance
        ));
    }

    if aggregates.cyclone_days > 5 {
        risks.push(format!(
            "High cyclone risk ({} days with cyclone risk)",
            aggregates.cyclone_days
        ));
    }

    risks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::crop::CycloneResistance;

    fn profile() -> CropProfile {
        CropProfile {
            name: "Test Crop".to_string(),
            min_temp: 20.0,
            max_temp: 35.0,
            optimal_temp: 28.0,
            min_rainfall: 1000.0,
            max_rainfall: 2500.0,
            optimal_rainfall: 1500.0,
            min_humidity: 70.0,
            max_humidity: 90.0,
            growth_period_days: 120,
            wind_tolerance: 20.0,
            cyclone_resistance: CycloneResistance::Low,
        }
    }

    fn aggregates() -> WeatherAggregates {
        WeatherAggregates {
            avg_temperature: 28.0,
            avg_rainfall: 1500.0,
            avg_humidity: 80.0,
            avg_wind: 5.0,
            max_wind: 5.0,
            cyclone_days: 0,
        }
    }

    #[test]
    fn test_recommendation_bands() {
        assert_eq!(Recommendation::for_score(100.0), Recommendation::HighlySuitable);
        assert_eq!(Recommendation::for_score(80.0), Recommendation::HighlySuitable);
        assert_eq!(Recommendation::for_score(79.9), Recommendation::Suitable);
        assert_eq!(Recommendation::for_score(60.0), Recommendation::Suitable);
        assert_eq!(Recommendation::for_score(40.0), Recommendation::ModeratelySuitable);
        assert_eq!(Recommendation::for_score(39.9), Recommendation::NotSuitable);
        assert_eq!(Recommendation::for_score(0.0), Recommendation::NotSuitable);
    }

    #[test]
    fn test_recommendation_display() {
        assert_eq!(Recommendation::HighlySuitable.to_string(), "Highly Suitable");
        assert_eq!(Recommendation::NotSuitable.to_string(), "Not Suitable");
    }

    #[test]
    fn test_recommendation_serialization() {
        let json = serde_json::to_string(&Recommendation::HighlySuitable).unwrap();
        assert_eq!(json, "\"Highly Suitable\"");
    }

    #[test]
    fn test_perfect_conditions_score_100() {
        let report = score_from_aggregates(&profile(), &aggregates());
        assert_eq!(report.temperature_score, 100.0);
        assert_eq!(report.rainfall_score, 100.0);
        assert_eq!(report.humidity_score, 100.0);
        assert_eq!(report.wind_score, 100.0);
        assert_eq!(report.cyclone_penalty, 0);
        assert_eq!(report.overall_score, 100.0);
        assert_eq!(report.recommendation, Recommendation::HighlySuitable);
        assert_eq!(report.survival_period, "120 days");
        assert!(report.risk_factors.is_empty());
    }

    #[test]
    fn test_temperature_outside_range_scores_zero() {
        let mut agg = aggregates();
        agg.avg_temperature = 50.0;
        let report = score_from_aggregates(&profile(), &agg);
        assert_eq!(report.temperature_score, 0.0);
        assert!(report
            .risk_factors
            .iter()
            .any(|r| r.contains("Temperature too high")));
    }

    #[test]
    fn test_temperature_falloff() {
        let mut agg = aggregates();
        agg.avg_temperature = 30.0; // 2° above optimal 28
        let report = score_from_aggregates(&profile(), &agg);
        assert_eq!(report.temperature_score, 90.0);
    }

    #[test]
    fn test_wind_score_falloff() {
        let mut agg = aggregates();
        agg.max_wind = 40.0;
        let report = score_from_aggregates(&profile(), &agg);
        assert_eq!(report.wind_score, 40.0);
    }

    #[test]
    fn test_cyclone_penalty_bands() {
        assert_eq!(cyclone_penalty(0), 0);
        assert_eq!(cyclone_penalty(3), 0);
        assert_eq!(cyclone_penalty(5), 0);
        assert_eq!(cyclone_penalty(6), 10);
        assert_eq!(cyclone_penalty(7), 10);
        assert_eq!(cyclone_penalty(10), 10);
        assert_eq!(cyclone_penalty(11), 20);
        assert_eq!(cyclone_penalty(12), 20);
    }

    #[test]
    fn test_risk_factors_stable_order() {
        let agg = WeatherAggregates {
            avg_temperature: 5.0,
            avg_rainfall: 100.0,
            avg_humidity: 10.0,
            avg_wind: 30.0,
            max_wind: 45.0,
            cyclone_days: 8,
        };
        let risks = risk_factors(&profile(), &agg);
        assert_eq!(risks.len(), 5);
        assert!(risks[0].contains("Temperature too low"));
        assert!(risks[1].contains("Insufficient rainfall"));
        assert!(risks[2].contains("Low humidity"));
        assert!(risks[3].contains("High wind speeds"));
        assert!(risks[4].contains("High cyclone risk"));
    }

    #[test]
    fn test_empty_series_is_an_error() {
        assert!(score_suitability(&profile(), &[]).is_err());
    }
}
