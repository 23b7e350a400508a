//! Text rendering of session output: distance labels, the needle angle and a
//! ready-made [`DisplaySink`] that keeps the strings a UI would show.

use crate::{DisplaySink, Phase, Reading, Status};

/// `"523m"` below one kilometre, `"1.2km"` from there on.
pub fn format_distance(distance_m: f64) -> String {
    if distance_m < 1_000.0 {
        format!("{}m", distance_m.round() as i64)
    } else {
        format!("{:.1}km", distance_m / 1_000.0)
    }
}

// ── Needle ────────────────────────────────────────────────────────────────────

/// Accumulated needle rotation.
///
/// The needle always turns the short way round, so its angle is unbounded:
/// going from 350° to 10° moves it to 370°, not back through 180°.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Needle {
    rotation_deg: f64,
}

impl Needle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn toward `target_deg` by the smallest signed step, returning the
    /// step taken, in (-180, 180].
    pub fn rotate_to(&mut self, target_deg: f64) -> f64 {
        let current = self.rotation_deg.rem_euclid(360.0);
        let mut delta = (target_deg - current).rem_euclid(360.0);
        if delta > 180.0 {
            delta -= 360.0;
        }
        self.rotation_deg += delta;
        delta
    }

    /// Total rotation applied so far, unwrapped.
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }
}

// ── TextDisplay ───────────────────────────────────────────────────────────────

/// A [`DisplaySink`] that renders everything to strings.
#[derive(Clone, Debug, Default)]
pub struct TextDisplay {
    /// Target name, category, distance and bearing, or a waiting message.
    pub info:   String,
    /// Last status line, with whether it was an error.
    pub status: Option<(String, bool)>,
    pub needle: Needle,
}

impl TextDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

fn waiting_message(phase: Phase) -> &'static str {
    match phase {
        Phase::NoTarget => "No towers found nearby.",
        Phase::NoData | Phase::Partial { .. } | Phase::Ready => "Waiting for location/compass...",
    }
}

impl DisplaySink for TextDisplay {
    fn on_reading(&mut self, reading: &Reading) {
        let bearing = match reading.bearing_deg {
            Some(b) => format!("{}°", b.round() as i64),
            None => "here".to_string(),
        };
        self.info = format!(
            "{}\n{}\nDistance: {}\nBearing: {}",
            reading.target.name,
            reading.target.category,
            format_distance(reading.distance_m),
            bearing,
        );
        if let Some(rel) = reading.relative_bearing_deg {
            self.needle.rotate_to(rel);
        }
    }

    fn on_waiting(&mut self, phase: Phase) {
        self.info = waiting_message(phase).to_string();
    }

    fn on_status(&mut self, status: &Status) {
        self.status = Some((status.to_string(), status.is_error()));
    }
}
