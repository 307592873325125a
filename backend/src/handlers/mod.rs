//! HTTP handlers for the CropCast Crop Suitability Platform

pub mod crop;
pub mod health;
pub mod prediction;
pub mod weather;

pub use crop::*;
pub use health::*;
pub use prediction::*;
pub use weather::*;
