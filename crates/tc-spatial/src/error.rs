//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `tc-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("dataset parse error: {0}")]
    Parse(String),

    #[error("GeoJSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
