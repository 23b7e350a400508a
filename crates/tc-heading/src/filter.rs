//! Heading smoothing.
//!
//! # Model
//!
//! ```text
//! raw ──► HeadingHistory (FIFO, last N) ──► arithmetic mean ──► hysteresis ──► + calibration
//! ```
//!
//! The mean is a plain arithmetic mean over degrees.  It is not circular:
//! samples either side of north average toward south (`[0, 0, 0, 0, 358]`
//! smooths to 71.6°).

use std::collections::VecDeque;

use tc_core::{normalize_degrees, NavConfig};

use crate::HeadingSample;

/// Default number of samples averaged.
pub const DEFAULT_HISTORY_SIZE: usize = 5;

/// Default hysteresis band, degrees.
pub const DEFAULT_MIN_CHANGE_DEG: f64 = 2.0;

// ── HeadingHistory ────────────────────────────────────────────────────────────

/// Bounded FIFO of the most recent raw headings.
#[derive(Clone, Debug)]
pub struct HeadingHistory {
    samples:  VecDeque<f64>,
    capacity: usize,
}

impl HeadingHistory {
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "heading history needs room for at least one sample");
        Self { samples: VecDeque::with_capacity(capacity), capacity }
    }

    /// Append `degrees`, evicting the oldest sample when full.
    pub fn push(&mut self, degrees: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(degrees);
    }

    /// Arithmetic mean of the stored samples, `None` when empty.
    pub fn mean(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: f64 = self.samples.iter().sum();
        Some(sum / self.samples.len() as f64)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
}

impl Default for HeadingHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Hysteresis check: publish only when the smoothed heading moved by more
/// than `min_delta_deg` since the last published value.
#[inline]
pub fn should_publish(previous_published: f64, smoothed: f64, min_delta_deg: f64) -> bool {
    (smoothed - previous_published).abs() > min_delta_deg
}

// ── HeadingFilter ─────────────────────────────────────────────────────────────

/// Smoothing filter with hysteresis and a calibration offset.
///
/// One instance per navigation session.
#[derive(Clone, Debug)]
pub struct HeadingFilter {
    history:         HeadingHistory,
    min_change_deg:  f64,
    calibration_deg: f64,
    /// Smoothed value (before calibration) at the last publish.
    last_published:  Option<f64>,
}

impl HeadingFilter {
    pub fn new(history_size: usize, min_change_deg: f64, calibration_deg: f64) -> Self {
        Self {
            history: HeadingHistory::new(history_size),
            min_change_deg,
            calibration_deg,
            last_published: None,
        }
    }

    /// Build from the heading fields of `config`.
    pub fn from_config(config: &NavConfig) -> Self {
        Self::new(
            config.heading_history_size,
            config.min_heading_change_deg,
            config.calibration_deg,
        )
    }

    /// Push `raw` into the history and return the smoothed heading.
    pub fn ingest(&mut self, raw: HeadingSample) -> f64 {
        self.history.push(raw.degrees());
        // The history holds at least the sample just pushed.
        self.history.mean().unwrap_or(raw.degrees())
    }

    /// Ingest `raw`; return the calibrated heading if it cleared the
    /// hysteresis band.
    ///
    /// The first smoothed value after construction or [`reset`](Self::reset)
    /// is always published.
    pub fn publish(&mut self, raw: HeadingSample) -> Option<HeadingSample> {
        let smoothed = self.ingest(raw);

        let publish = match self.last_published {
            None => true,
            Some(prev) => should_publish(prev, smoothed, self.min_change_deg),
        };
        if !publish {
            tracing::trace!(smoothed, "heading change inside hysteresis band");
            return None;
        }

        self.last_published = Some(smoothed);
        // Both operands are finite, so construction cannot fail.
        HeadingSample::new(normalize_degrees(smoothed + self.calibration_deg)).ok()
    }

    /// Forget all history and the last published value.
    pub fn reset(&mut self) {
        self.history.clear();
        self.last_published = None;
    }

    pub fn history(&self) -> &HeadingHistory {
        &self.history
    }

    pub fn last_published(&self) -> Option<f64> {
        self.last_published
    }

    pub fn calibration_deg(&self) -> f64 {
        self.calibration_deg
    }

    /// Change the calibration offset applied to future publishes.
    pub fn set_calibration_deg(&mut self, calibration_deg: f64) {
        self.calibration_deg = calibration_deg;
    }
}

impl Default for HeadingFilter {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE, DEFAULT_MIN_CHANGE_DEG, 0.0)
    }
}
