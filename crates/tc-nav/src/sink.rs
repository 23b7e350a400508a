//! Display sink trait: where session output goes.

use std::fmt;

use crate::{Phase, Reading, SourceError};

/// Which external sensor stream a status refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sensor {
    Location,
    Heading,
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sensor::Location => f.write_str("location"),
            Sensor::Heading => f.write_str("compass"),
        }
    }
}

/// Persistent, user-facing status events.
#[derive(Clone, Debug, PartialEq)]
pub enum Status {
    DatasetLoaded { points: usize },
    DatasetUnavailable { reason: String },
    SourceUnavailable { sensor: Sensor, error: SourceError },
}

impl Status {
    pub fn is_error(&self) -> bool {
        !matches!(self, Status::DatasetLoaded { .. })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::DatasetLoaded { points } => write!(f, "Loaded {points} towers"),
            Status::DatasetUnavailable { reason } => write!(f, "Failed to load towers: {reason}"),
            Status::SourceUnavailable { sensor: Sensor::Location, error: SourceError::Unsupported } => {
                f.write_str("Geolocation not supported")
            }
            Status::SourceUnavailable { sensor: Sensor::Heading, error: SourceError::Unsupported } => {
                f.write_str("Compass not supported")
            }
            Status::SourceUnavailable { sensor: Sensor::Location, error } => {
                write!(f, "Location error: {error}")
            }
            Status::SourceUnavailable { sensor: Sensor::Heading, error } => {
                write!(f, "Compass error: {error}")
            }
        }
    }
}

/// Receives session output: one `on_reading` or `on_waiting` per processed
/// update, and `on_status` whenever the dataset or a sensor changes state.
///
/// Every method defaults to doing nothing.
///
/// # Example: needle printer
///
/// ```rust,ignore
/// struct NeedlePrinter;
///
/// impl DisplaySink for NeedlePrinter {
///     fn on_reading(&mut self, reading: &Reading) {
///         if let Some(rel) = reading.relative_bearing_deg {
///             println!("turn needle to {rel:.0}°");
///         }
///     }
/// }
/// ```
pub trait DisplaySink {
    /// A processed update reached [`Phase::Ready`].
    fn on_reading(&mut self, _reading: &Reading) {}

    /// A processed update ended in any phase other than `Ready`.
    fn on_waiting(&mut self, _phase: Phase) {}

    /// Dataset or sensor status changed.
    fn on_status(&mut self, _status: &Status) {}
}

/// Discards all output.
pub struct NoopSink;

impl DisplaySink for NoopSink {}
