use thiserror::Error;

use tc_core::CoreError;
use tc_spatial::SpatialError;

/// Why a location or heading source stopped delivering.
///
/// Not a [`NavError`]: source failures are surfaced to the display as a
/// [`Status`][crate::Status] and never abort anything.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("Permission denied")]
    PermissionDenied,

    #[error("Position unavailable")]
    PositionUnavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Not supported")]
    Unsupported,
}

#[derive(Debug, Error)]
pub enum NavError {
    #[error("navigation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("point-of-interest data unavailable: {0}")]
    DataUnavailable(#[from] SpatialError),
}

pub type NavResult<T> = Result<T, NavError>;
