//! Navigation tuning parameters.

use crate::{CoreError, CoreResult};

/// Top-level navigation configuration.
///
/// Typically built with [`NavConfig::default`] and tweaked field by field, or
/// loaded from a JSON file by the application crate (enable the `serde`
/// feature).  Missing fields in a config file fall back to the defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Minimum spacing between processed session updates.  Default: 100 ms.
    pub update_interval_ms: u64,

    /// Number of raw headings averaged by the heading filter.  Default: 5.
    pub heading_history_size: usize,

    /// Movement that invalidates the cached nearest target.  Default: 100 m.
    pub movement_threshold_m: f64,

    /// Targets farther than this are never selected.  Default: 50 km.
    pub max_target_distance_m: f64,

    /// Smoothed heading must move by more than this to be published.
    /// Default: 2°.
    pub min_heading_change_deg: f64,

    /// Constant added to every published heading.  Default: 0°.
    pub calibration_deg: f64,

    /// Extra rotation applied to device-frame (`alpha`) orientation readings
    /// before conversion.  Default: 0°.
    pub alpha_offset_deg: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            update_interval_ms:     100,
            heading_history_size:   5,
            movement_threshold_m:   100.0,
            max_target_distance_m:  50_000.0,
            min_heading_change_deg: 2.0,
            calibration_deg:        0.0,
            alpha_offset_deg:       0.0,
        }
    }
}

impl NavConfig {
    /// Reject configurations the session cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.heading_history_size == 0 {
            return Err(CoreError::Config("heading_history_size must be at least 1".into()));
        }
        check_non_negative("movement_threshold_m", self.movement_threshold_m)?;
        check_non_negative("max_target_distance_m", self.max_target_distance_m)?;
        check_non_negative("min_heading_change_deg", self.min_heading_change_deg)?;
        if !self.calibration_deg.is_finite() || !self.alpha_offset_deg.is_finite() {
            return Err(CoreError::Config("heading offsets must be finite".into()));
        }
        Ok(())
    }
}

fn check_non_negative(name: &str, value: f64) -> CoreResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::Config(format!("{name} must be a finite, non-negative number (got {value})")))
    }
}
