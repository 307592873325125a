//! Shared types and models for the CropCast Crop Suitability Platform
//!
//! This crate contains the value types and the pure computation core
//! (weather synthesis, suitability scoring, risk analysis) shared between
//! the backend and other components of the system.

pub mod models;
pub mod synthesis;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
