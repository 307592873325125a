//! Weather synthesis integration tests
//!
//! Covers the synthesizer contract:
//! - Determinism: identical inputs yield identical series
//! - Length: the series has exactly the requested number of days
//! - Clamping: every field stays within its physical bounds

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use shared::synthesis::{fnv1a32, synthesize_from};

fn origin() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// The jitter hash must match the published FNV-1a 32-bit vectors, or
    /// series are no longer reproducible across implementations
    #[test]
    fn test_fnv1a32_reference_vectors() {
        assert_eq!(fnv1a32(""), 0x811c9dc5);
        assert_eq!(fnv1a32("a"), 0xe40c292c);
        assert_eq!(fnv1a32("foobar"), 0xbf9cf968);
    }

    #[test]
    fn test_identical_inputs_identical_series() {
        let first = synthesize_from(origin(), 18.7883, 98.9853, 365);
        let second = synthesize_from(origin(), 18.7883, 98.9853, 365);
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_day_series() {
        let series = synthesize_from(origin(), 13.7563, 100.5018, 1);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].date, origin());
    }

    #[test]
    fn test_series_runs_backwards_from_origin() {
        let series = synthesize_from(origin(), 7.8804, 98.3923, 14);
        for (offset, day) in series.iter().enumerate() {
            assert_eq!(day.date, origin() - Duration::days(offset as i64));
        }
    }

    #[test]
    fn test_different_locations_differ() {
        let chiang_mai = synthesize_from(origin(), 18.7883, 98.9853, 30);
        let bangkok = synthesize_from(origin(), 13.7563, 100.5018, 30);
        assert_ne!(chiang_mai, bangkok);
    }

    #[test]
    fn test_inland_drier_than_coastal_on_average() {
        // |longitude| > 100 selects the inland rainfall model.
        let coastal = synthesize_from(origin(), 20.0, 90.0, 365);
        let inland = synthesize_from(origin(), 20.0, 140.0, 365);

        let mean = |series: &[shared::WeatherDay]| {
            series.iter().map(|d| d.rainfall).sum::<f64>() / series.len() as f64
        };
        assert!(mean(&coastal) > mean(&inland));
    }

    #[test]
    fn test_no_cyclone_risk_outside_tropics() {
        for day in synthesize_from(origin(), 45.0, 10.0, 365) {
            assert!(!day.cyclone_risk);
        }
        for day in synthesize_from(origin(), -40.0, 10.0, 365) {
            assert!(!day.cyclone_risk);
        }
    }

    #[test]
    fn test_cyclone_risk_confined_to_periodic_window() {
        let series = synthesize_from(origin(), 10.0, 125.0, 365);
        for (offset, day) in series.iter().enumerate() {
            if day.cyclone_risk {
                assert!(offset % 100 < 8, "cyclone flag outside window at {offset}");
            }
        }
    }

    #[test]
    fn test_values_rounded_to_one_decimal() {
        for day in synthesize_from(origin(), 35.5, -80.25, 60) {
            for value in [day.temperature, day.rainfall, day.humidity, day.wind_speed] {
                let scaled = value * 10.0;
                assert!((scaled - scaled.round()).abs() < 1e-6);
            }
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn latitude_strategy() -> impl Strategy<Value = f64> {
        -90.0..=90.0f64
    }

    fn longitude_strategy() -> impl Strategy<Value = f64> {
        -180.0..=180.0f64
    }

    fn day_count_strategy() -> impl Strategy<Value = u32> {
        1..=400u32
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Determinism: two calls with identical arguments are identical
        #[test]
        fn prop_synthesis_is_deterministic(
            lat in latitude_strategy(),
            lon in longitude_strategy(),
            days in day_count_strategy()
        ) {
            let first = synthesize_from(origin(), lat, lon, days);
            let second = synthesize_from(origin(), lat, lon, days);
            prop_assert_eq!(first, second);
        }

        /// Length contract: exactly as many days as requested
        #[test]
        fn prop_series_length(
            lat in latitude_strategy(),
            lon in longitude_strategy(),
            days in day_count_strategy()
        ) {
            prop_assert_eq!(synthesize_from(origin(), lat, lon, days).len(), days as usize);
        }

        /// Clamping: every produced field is within its physical bounds
        #[test]
        fn prop_fields_within_bounds(
            lat in latitude_strategy(),
            lon in longitude_strategy(),
            days in 1..=120u32
        ) {
            for day in synthesize_from(origin(), lat, lon, days) {
                prop_assert!((-10.0..=45.0).contains(&day.temperature));
                prop_assert!(day.rainfall >= 0.0);
                prop_assert!((20.0..=95.0).contains(&day.humidity));
                prop_assert!((0.0..=50.0).contains(&day.wind_speed));
            }
        }

        /// The cyclone flag obeys its latitude bound
        #[test]
        fn prop_cyclone_flag_latitude_bounded(
            lat in latitude_strategy(),
            lon in longitude_strategy()
        ) {
            let series = synthesize_from(origin(), lat, lon, 100);
            if lat.abs() >= 30.0 {
                prop_assert!(series.iter().all(|d| !d.cyclone_risk));
            }
        }

        /// Dates run backwards one day at a time from the origin
        #[test]
        fn prop_dates_descend_from_origin(
            lat in latitude_strategy(),
            lon in longitude_strategy(),
            days in 2..=60u32
        ) {
            let series = synthesize_from(origin(), lat, lon, days);
            prop_assert_eq!(series[0].date, origin());
            for window in series.windows(2) {
                prop_assert_eq!(window[1].date, window[0].date - Duration::days(1));
            }
        }
    }
}
