//! Navigation state owned by a [`NavigationSession`][crate::NavigationSession].

use std::fmt;

use tc_core::{bearing, normalize_degrees, GeoPoint, PointOfInterest};
use tc_heading::HeadingSample;

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Where the session is in its lifecycle.
///
/// ```text
/// NoData ──► Partial ──► Ready ◄─┐
///               │          └─────┘
///               └──► NoTarget
/// ```
///
/// There is no terminal phase; a session ends when its owner drops it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No dataset loaded yet, or neither a position nor a heading.
    NoData,
    /// Exactly one of position and heading is known.
    Partial { has_position: bool, has_heading: bool },
    /// Both known, but no target lies within the search radius.
    NoTarget,
    /// Both known and a target resolved; a [`Reading`] is available.
    Ready,
}

impl Phase {
    #[inline]
    pub fn is_ready(self) -> bool {
        matches!(self, Phase::Ready)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::NoData => f.write_str("no data"),
            Phase::Partial { has_position: true, .. } => f.write_str("waiting for heading"),
            Phase::Partial { .. } => f.write_str("waiting for position"),
            Phase::NoTarget => f.write_str("no target in range"),
            Phase::Ready => f.write_str("ready"),
        }
    }
}

// ── Nearest cache ─────────────────────────────────────────────────────────────

/// Result of one nearest-target scan and the position it was computed for.
///
/// Stored as a single value so the target and its reference position are
/// always replaced together.
#[derive(Clone, Debug, PartialEq)]
pub struct NearestCache {
    pub computed_at: GeoPoint,
    /// `None` when nothing was within range at `computed_at`.
    pub target:      Option<PointOfInterest>,
}

// ── Reading ───────────────────────────────────────────────────────────────────

/// What a display needs to draw the compass.
#[derive(Clone, Debug, PartialEq)]
pub struct Reading {
    pub target:               PointOfInterest,
    pub position:             GeoPoint,
    pub heading_deg:          f64,
    /// Live distance from `position` to the target, metres.
    pub distance_m:           f64,
    /// Initial bearing to the target.  `None` when standing on it.
    pub bearing_deg:          Option<f64>,
    /// Needle angle relative to the device's heading, [0, 360).
    pub relative_bearing_deg: Option<f64>,
}

impl Reading {
    /// Project `position` + `heading` onto `target`.
    pub fn project(position: GeoPoint, heading: HeadingSample, target: &PointOfInterest) -> Reading {
        let bearing_deg = bearing(position, target.position);
        Reading {
            target: target.clone(),
            position,
            heading_deg: heading.degrees(),
            distance_m: position.distance_m(target.position),
            bearing_deg,
            relative_bearing_deg: bearing_deg.map(|b| relative_bearing(b, heading.degrees())),
        }
    }
}

/// `(bearing - heading + 360) mod 360`.
#[inline]
pub fn relative_bearing(bearing_deg: f64, heading_deg: f64) -> f64 {
    normalize_degrees(bearing_deg - heading_deg + 360.0)
}

// ── NavigationState ───────────────────────────────────────────────────────────

/// Everything the session knows.  Read-only outside the session.
#[derive(Clone, Debug)]
pub struct NavigationState {
    pub(crate) position: Option<GeoPoint>,
    pub(crate) heading:  Option<HeadingSample>,
    pub(crate) nearest:  Option<NearestCache>,
    pub(crate) reading:  Option<Reading>,
    pub(crate) phase:    Phase,
}

impl NavigationState {
    pub(crate) fn new() -> Self {
        Self {
            position: None,
            heading:  None,
            nearest:  None,
            reading:  None,
            phase:    Phase::NoData,
        }
    }

    pub fn position(&self) -> Option<GeoPoint> {
        self.position
    }

    /// Last published (smoothed, calibrated) heading.
    pub fn heading(&self) -> Option<HeadingSample> {
        self.heading
    }

    pub fn nearest(&self) -> Option<&NearestCache> {
        self.nearest.as_ref()
    }

    pub fn nearest_poi(&self) -> Option<&PointOfInterest> {
        self.nearest.as_ref().and_then(|c| c.target.as_ref())
    }

    pub fn last_computed_at(&self) -> Option<GeoPoint> {
        self.nearest.as_ref().map(|c| c.computed_at)
    }

    /// Projection from the last processed update, present only in
    /// [`Phase::Ready`].
    pub fn reading(&self) -> Option<&Reading> {
        self.reading.as_ref()
    }

    /// Phase as of the last processed update.
    pub fn phase(&self) -> Phase {
        self.phase
    }
}
