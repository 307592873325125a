//! Crop catalog loading
//!
//! The catalog is configuration data: loaded once at process start, then
//! handed to the request handlers as an immutable value. A TOML file can
//! replace the built-in crop set, e.g.:
//!
//! ```toml
//! [rice]
//! name = "Rice"
//! min_temp = 20.0
//! max_temp = 35.0
//! optimal_temp = 28.0
//! # ...
//! ```

use std::collections::HashMap;

use shared::{CropCatalog, CropProfile};

use crate::error::{AppError, AppResult};

/// Build the crop catalog, from a TOML file when a path is configured,
/// otherwise the built-in crop set
pub fn load(path: Option<&str>) -> AppResult<CropCatalog> {
    match path {
        Some(path) => from_file(path),
        None => Ok(CropCatalog::builtin()),
    }
}

/// Load and validate a crop catalog from a TOML file
pub fn from_file(path: &str) -> AppResult<CropCatalog> {
    let source = config::Config::builder()
        .add_source(config::File::with_name(path))
        .build()
        .map_err(|e| AppError::Configuration(format!("cannot read crop catalog: {e}")))?;

    let crops: HashMap<String, CropProfile> = source
        .try_deserialize()
        .map_err(|e| AppError::Configuration(format!("malformed crop catalog: {e}")))?;

    CropCatalog::new(crops).map_err(|e| AppError::Configuration(e.to_string()))
}
