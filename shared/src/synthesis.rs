//! Deterministic weather-series synthesis
//!
//! Produces a plausible daily climate record for a coordinate without
//! calling any live weather service. The same inputs always yield the same
//! series: every pseudo-random term is derived from a 32-bit FNV-1a hash of
//! the inputs, so a series can be reproduced independently in any runtime.

use std::f64::consts::TAU;

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{round1, WeatherDay};

/// Physical bounds for generated fields
const TEMPERATURE_BOUNDS: (f64, f64) = (-10.0, 45.0);
const HUMIDITY_BOUNDS: (f64, f64) = (20.0, 95.0);
const WIND_BOUNDS: (f64, f64) = (0.0, 50.0);

/// Seasonal sinusoid amplitudes and peak offsets (days into the year)
const SEASONAL_TEMP_AMPLITUDE: f64 = 12.0;
const SEASONAL_TEMP_PEAK_OFFSET: f64 = 80.0;
const SEASONAL_RAIN_AMPLITUDE: f64 = 300.0;
const SEASONAL_RAIN_PEAK_OFFSET: f64 = 150.0;
const SEASONAL_WIND_AMPLITUDE: f64 = 5.0;
const SEASONAL_HUMIDITY_AMPLITUDE: f64 = 15.0;
const SEASONAL_HUMIDITY_PEAK_OFFSET: f64 = 100.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Short-period weather swings independent of season
const WEEKLY_TEMP_AMPLITUDE: f64 = 3.0;
const WEEKLY_TEMP_PERIOD: f64 = 7.0;
const GUST_WIND_AMPLITUDE: f64 = 2.0;
const GUST_WIND_PERIOD: f64 = 3.0;

/// Cyclone bursts: tropical latitudes only, within an 8-day window every
/// 100 days, on days whose wind jitter exceeds this threshold
const CYCLONE_LATITUDE_LIMIT: f64 = 30.0;
const CYCLONE_WIND_JITTER_THRESHOLD: f64 = 8.0;
const CYCLONE_CYCLE_DAYS: u32 = 100;
const CYCLONE_WINDOW_DAYS: u32 = 8;

/// 32-bit FNV-1a hash
///
/// This is the stable hash behind every jitter term; changing it changes
/// every synthesized series.
pub fn fnv1a32(input: &str) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in input.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(16_777_619);
    }
    hash
}

/// Hash of the canonical `"lat:lon:day:tag"` encoding for one jitter channel
fn channel_hash(latitude: f64, longitude: f64, day_offset: u32, tag: &str) -> u32 {
    fnv1a32(&format!("{latitude}:{longitude}:{day_offset}:{tag}"))
}

/// Temperature jitter in [-5.0, +4.9] °C
fn temperature_jitter(latitude: f64, longitude: f64, day_offset: u32) -> f64 {
    ((channel_hash(latitude, longitude, day_offset, "temp") % 100) as f64 - 50.0) / 10.0
}

/// Rainfall jitter in [-100, +99] mm
fn rainfall_jitter(latitude: f64, longitude: f64, day_offset: u32) -> f64 {
    (channel_hash(latitude, longitude, day_offset, "rain") % 200) as f64 - 100.0
}

/// Wind jitter in [-10.0, +9.67] km/h
fn wind_jitter(latitude: f64, longitude: f64, day_offset: u32) -> f64 {
    ((channel_hash(latitude, longitude, day_offset, "wind") % 60) as f64 - 30.0) / 3.0
}

/// Humidity jitter in [-10, +9] %, keyed on the day offset alone
fn humidity_jitter(day_offset: u32) -> f64 {
    (fnv1a32(&day_offset.to_string()) % 20) as f64 - 10.0
}

/// Baseline temperature from a three-band piecewise-linear climate model
fn baseline_temperature(latitude: f64) -> f64 {
    if latitude > 30.0 {
        15.0 + (latitude - 45.0).abs() * 0.8
    } else if latitude < -20.0 {
        12.0 + (latitude + 35.0).abs() * 0.7
    } else {
        25.0 + (latitude - 15.0).abs() * 0.6
    }
}

/// Baseline rainfall: inland when far from the prime meridian, else coastal
fn baseline_rainfall(latitude: f64, longitude: f64) -> f64 {
    if longitude.abs() > 100.0 {
        400.0 + (latitude - 30.0).abs() * 15.0
    } else {
        800.0 + (latitude - 20.0).abs() * 25.0
    }
}

fn baseline_wind(latitude: f64, longitude: f64) -> f64 {
    8.0 + latitude.abs() * 0.3 + longitude.abs() * 0.1
}

fn seasonal_wave(day_of_year: f64, peak_offset: f64, amplitude: f64) -> f64 {
    amplitude * (TAU * (day_of_year - peak_offset) / DAYS_PER_YEAR).sin()
}

/// Synthesize a weather series of `day_count` entries, ordered from the
/// origin date (index 0) backwards in time
///
/// Pure and deterministic: identical arguments always produce an identical
/// series. Callers are expected to validate coordinate and day-count ranges
/// before invoking.
pub fn synthesize_from(
    origin: NaiveDate,
    latitude: f64,
    longitude: f64,
    day_count: u32,
) -> Vec<WeatherDay> {
    let base_temp = baseline_temperature(latitude);
    let base_rainfall = baseline_rainfall(latitude, longitude);
    let base_wind = baseline_wind(latitude, longitude);

    let mut series = Vec::with_capacity(day_count as usize);
    for day_offset in 0..day_count {
        let date = origin - Duration::days(i64::from(day_offset));
        let day_of_year = f64::from(date.ordinal());
        let offset = f64::from(day_offset);

        let seasonal_temp = base_temp
            + seasonal_wave(day_of_year, SEASONAL_TEMP_PEAK_OFFSET, SEASONAL_TEMP_AMPLITUDE);
        let weekly_temp = WEEKLY_TEMP_AMPLITUDE * (TAU * offset / WEEKLY_TEMP_PERIOD).sin();
        let temp_jitter = temperature_jitter(latitude, longitude, day_offset);
        let temperature_signal = seasonal_temp + weekly_temp + temp_jitter;

        let seasonal_rain = base_rainfall
            + seasonal_wave(day_of_year, SEASONAL_RAIN_PEAK_OFFSET, SEASONAL_RAIN_AMPLITUDE);
        let rainfall = seasonal_rain + rainfall_jitter(latitude, longitude, day_offset);

        let seasonal_wind = base_wind + seasonal_wave(day_of_year, 0.0, SEASONAL_WIND_AMPLITUDE);
        let gust_wind = GUST_WIND_AMPLITUDE * (TAU * offset / GUST_WIND_PERIOD).sin();
        let day_wind_jitter = wind_jitter(latitude, longitude, day_offset);
        let wind_speed = seasonal_wind + gust_wind + day_wind_jitter;

        // Hotter days depress the humidity baseline.
        let base_humidity = 70.0 - (temperature_signal - 20.0) * 1.5;
        let seasonal_humidity = base_humidity
            + seasonal_wave(
                day_of_year,
                SEASONAL_HUMIDITY_PEAK_OFFSET,
                SEASONAL_HUMIDITY_AMPLITUDE,
            );
        let humidity = seasonal_humidity + humidity_jitter(day_offset);

        let cyclone_risk = latitude.abs() < CYCLONE_LATITUDE_LIMIT
            && day_wind_jitter > CYCLONE_WIND_JITTER_THRESHOLD
            && day_offset % CYCLONE_CYCLE_DAYS < CYCLONE_WINDOW_DAYS;

        series.push(WeatherDay {
            date,
            temperature: round1(
                temperature_signal.clamp(TEMPERATURE_BOUNDS.0, TEMPERATURE_BOUNDS.1),
            ),
            rainfall: round1(rainfall.max(0.0)),
            humidity: round1(humidity.clamp(HUMIDITY_BOUNDS.0, HUMIDITY_BOUNDS.1)),
            wind_speed: round1(wind_speed.clamp(WIND_BOUNDS.0, WIND_BOUNDS.1)),
            cyclone_risk,
        });
    }

    series
}
