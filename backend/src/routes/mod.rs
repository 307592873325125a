//! Route definitions for the CropCast Crop Suitability Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Crop catalog
        .nest("/crops", crop_routes())
        // Suitability prediction
        .route("/predict", post(handlers::predict))
        // Weather summaries
        .nest("/weather", weather_routes())
}

/// Crop catalog routes
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_crops))
        .route("/:crop_id", get(handlers::get_crop_details))
}

/// Weather summary routes
fn weather_routes() -> Router<AppState> {
    Router::new().route("/:latitude/:longitude", get(handlers::get_weather_summary))
}
