//! Nearest point-of-interest search and the movement-based re-use policy.
//!
//! The search is a linear O(n) pass with haversine distances.  It runs only
//! after the user has moved more than the movement threshold, and tower sets
//! hold hundreds of points.

use tc_core::{GeoPoint, PointOfInterest};

/// The winning candidate of a [`find_nearest`] scan.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Nearest<'a> {
    pub poi:        &'a PointOfInterest,
    /// Position of `poi` in the scanned slice.
    pub index:      usize,
    pub distance_m: f64,
}

/// `true` when the nearest target must be recomputed: nothing has been
/// computed yet, or `current` is more than `threshold_m` from where the last
/// computation happened.  A distance that cannot be computed (NaN) also
/// forces a recompute.
pub fn should_recompute(last_computed_at: Option<GeoPoint>, current: GeoPoint, threshold_m: f64) -> bool {
    match last_computed_at {
        None => true,
        Some(last) => {
            let moved = last.distance_m(current);
            moved.is_nan() || moved > threshold_m
        }
    }
}

/// Closest candidate to `current` within `max_radius_m`.
///
/// Ties go to the candidate that appears first in `candidates`.  Returns
/// `None` for an empty slice or when every candidate is out of range.
pub fn find_nearest(
    current:      GeoPoint,
    candidates:   &[PointOfInterest],
    max_radius_m: f64,
) -> Option<Nearest<'_>> {
    let mut best: Option<Nearest<'_>> = None;

    for (index, poi) in candidates.iter().enumerate() {
        let distance_m = current.distance_m(poi.position);
        if distance_m.is_nan() || distance_m > max_radius_m {
            continue;
        }
        // Strict `<` keeps the earliest of equal candidates.
        if best.is_none_or(|b| distance_m < b.distance_m) {
            best = Some(Nearest { poi, index, distance_m });
        }
    }

    best
}

// ── PoiIndex ──────────────────────────────────────────────────────────────────

/// The loaded point-of-interest set.  Read-only after construction.
#[derive(Clone, Debug, Default)]
pub struct PoiIndex {
    points: Vec<PointOfInterest>,
}

impl PoiIndex {
    pub fn new(points: Vec<PointOfInterest>) -> Self {
        Self { points }
    }

    /// See [`find_nearest`].
    pub fn find_nearest(&self, current: GeoPoint, max_radius_m: f64) -> Option<Nearest<'_>> {
        find_nearest(current, &self.points, max_radius_m)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PointOfInterest] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&PointOfInterest> {
        self.points.get(index)
    }
}

impl From<Vec<PointOfInterest>> for PoiIndex {
    fn from(points: Vec<PointOfInterest>) -> Self {
        Self::new(points)
    }
}
