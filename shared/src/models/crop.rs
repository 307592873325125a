//! Crop profile models and the static crop catalog

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::validate_crop_profile;

/// Agronomic thresholds for a single crop
///
/// Rainfall bounds are expressed over the scoring window, matched against
/// the mean daily rainfall of a weather series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropProfile {
    pub name: String,
    pub min_temp: f64,
    pub max_temp: f64,
    pub optimal_temp: f64,
    pub min_rainfall: f64,
    pub max_rainfall: f64,
    pub optimal_rainfall: f64,
    pub min_humidity: f64,
    pub max_humidity: f64,
    pub growth_period_days: u32,
    /// Maximum sustained wind in km/h before yield loss
    pub wind_tolerance: f64,
    pub cyclone_resistance: CycloneResistance,
}

/// How well a crop withstands cyclone conditions (descriptive only)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CycloneResistance {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for CycloneResistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CycloneResistance::Low => write!(f, "low"),
            CycloneResistance::Medium => write!(f, "medium"),
            CycloneResistance::High => write!(f, "high"),
        }
    }
}

/// Errors raised while assembling a crop catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog contains no crops")]
    Empty,

    #[error("invalid profile for crop '{id}': {reason}")]
    InvalidProfile { id: String, reason: String },
}

/// Read-only mapping from crop identifier to profile
///
/// Constructed once at startup and never mutated afterwards, so it can be
/// shared across request handlers without locking.
#[derive(Debug, Clone)]
pub struct CropCatalog {
    crops: HashMap<String, CropProfile>,
}

impl CropCatalog {
    /// Build a catalog from explicit entries, validating every profile
    pub fn new(crops: HashMap<String, CropProfile>) -> Result<Self, CatalogError> {
        if crops.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (id, profile) in &crops {
            validate_crop_profile(profile).map_err(|reason| CatalogError::InvalidProfile {
                id: id.clone(),
                reason,
            })?;
        }
        Ok(Self { crops })
    }

    /// The built-in crop database
    pub fn builtin() -> Self {
        let mut crops = HashMap::new();

        crops.insert(
            "rice".to_string(),
            CropProfile {
                name: "Rice".to_string(),
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
            },
        );
        crops.insert(
            "wheat".to_string(),
            CropProfile {
                name: "Wheat".to_string(),
                min_temp: 10.0,
                max_temp: 25.0,
                optimal_temp: 18.0,
                min_rainfall: 500.0,
                max_rainfall: 1000.0,
                optimal_rainfall: 750.0,
                min_humidity: 40.0,
                max_humidity: 70.0,
                growth_period_days: 150,
                wind_tolerance: 30.0,
                cyclone_resistance: CycloneResistance::Medium,
            },
        );
        crops.insert(
            "corn".to_string(),
            CropProfile {
                name: "Corn".to_string(),
                min_temp: 15.0,
                max_temp: 30.0,
                optimal_temp: 22.0,
                min_rainfall: 600.0,
                max_rainfall: 1200.0,
                optimal_rainfall: 900.0,
                min_humidity: 50.0,
                max_humidity: 80.0,
                growth_period_days: 100,
                wind_tolerance: 25.0,
                cyclone_resistance: CycloneResistance::Medium,
            },
        );
        crops.insert(
            "tomato".to_string(),
            CropProfile {
                name: "Tomato".to_string(),
                min_temp: 18.0,
                max_temp: 30.0,
                optimal_temp: 24.0,
                min_rainfall: 400.0,
                max_rainfall: 800.0,
                optimal_rainfall: 600.0,
                min_humidity: 60.0,
                max_humidity: 85.0,
                growth_period_days: 90,
                wind_tolerance: 15.0,
                cyclone_resistance: CycloneResistance::Low,
            },
        );
        crops.insert(
            "potato".to_string(),
            CropProfile {
                name: "Potato".to_string(),
                min_temp: 10.0,
                max_temp: 25.0,
                optimal_temp: 18.0,
                min_rainfall: 300.0,
                max_rainfall: 700.0,
                optimal_rainfall: 500.0,
                min_humidity: 60.0,
                max_humidity: 80.0,
                growth_period_days: 110,
                wind_tolerance: 20.0,
                cyclone_resistance: CycloneResistance::Medium,
            },
        );

        Self { crops }
    }

    /// All crop identifiers, sorted for stable listings
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.crops.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Look up a profile by crop identifier
    pub fn get(&self, id: &str) -> Option<&CropProfile> {
        self.crops.get(id)
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> CropProfile {
        CropProfile {
            name: "Sample".to_string(),
            min_temp: 10.0,
            max_temp: 30.0,
            optimal_temp: 20.0,
            min_rainfall: 500.0,
            max_rainfall: 1500.0,
            optimal_rainfall: 1000.0,
            min_humidity: 40.0,
            max_humidity: 80.0,
            growth_period_days: 100,
            wind_tolerance: 25.0,
            cyclone_resistance: CycloneResistance::Medium,
        }
    }

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = CropCatalog::builtin();
        assert_eq!(catalog.len(), 5);
        assert_eq!(
            catalog.ids(),
            vec!["corn", "potato", "rice", "tomato", "wheat"]
        );

        let rice = catalog.get("rice").unwrap();
        assert_eq!(rice.name, "Rice");
        assert_eq!(rice.optimal_temp, 28.0);
        assert_eq!(rice.cyclone_resistance, CycloneResistance::Low);
    }

    #[test]
    fn test_unknown_crop_lookup() {
        let catalog = CropCatalog::builtin();
        assert!(catalog.get("durian").is_none());
    }

    #[test]
    fn test_new_rejects_empty_catalog() {
        let result = CropCatalog::new(HashMap::new());
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn test_new_rejects_invalid_profile() {
        let mut profile = sample_profile();
        profile.optimal_temp = 50.0; // outside [min_temp, max_temp]

        let mut crops = HashMap::new();
        crops.insert("sample".to_string(), profile);

        let result = CropCatalog::new(crops);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidProfile { .. })
        ));
    }

    #[test]
    fn test_new_accepts_valid_profile() {
        let mut crops = HashMap::new();
        crops.insert("sample".to_string(), sample_profile());
        let catalog = CropCatalog::new(crops).unwrap();
        assert_eq!(catalog.ids(), vec!["sample"]);
    }

    #[test]
    fn test_cyclone_resistance_serialization() {
        let json = serde_json::to_string(&CycloneResistance::Low).unwrap();
        assert_eq!(json, "\"low\"");
        let parsed: CycloneResistance = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(parsed, CycloneResistance::High);
    }
}
