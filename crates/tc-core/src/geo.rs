//! Geographic coordinate type and great-circle geodesy.
//!
//! Everything here treats the Earth as a sphere of radius
//! [`EARTH_RADIUS_M`].  That is plenty for "how far is the nearest tower"
//! questions over a few tens of kilometres; nothing in the navigation core
//! needs ellipsoidal accuracy.
//!
//! Degenerate inputs (bearing between identical points, centroid of an empty
//! ring) are ordinary events, e.g. a user standing exactly on a tower, so they
//! return `None` instead of an error.

use crate::{CoreError, CoreResult};

/// Mean Earth radius, metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in double-precision degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Construct without range checks.  Use [`try_new`](Self::try_new) for
    /// values that come from outside the process.
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct and validate: both values finite, latitude in [-90, 90] and
    /// longitude in [-180, 180].
    pub fn try_new(lat: f64, lon: f64) -> CoreResult<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::OutOfRange { what: "latitude", value: lat });
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(CoreError::OutOfRange { what: "longitude", value: lon });
        }
        Ok(Self { lat, lon })
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        distance(self, other)
    }

    /// Initial bearing from `self` toward `other`, degrees in [0, 360).
    ///
    /// `None` when the two points are identical.
    pub fn bearing_to(self, other: GeoPoint) -> Option<f64> {
        bearing(self, other)
    }

    /// Project a point `distance_m` metres away along the initial bearing
    /// `bearing_deg` (0 = north, clockwise).
    pub fn destination(self, bearing_deg: f64, distance_m: f64) -> GeoPoint {
        let lat1 = self.lat.to_radians();
        let lon1 = self.lon.to_radians();
        let brng = bearing_deg.to_radians();
        let angular = distance_m / EARTH_RADIUS_M;

        let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * brng.cos()).asin();
        let lon2 = lon1
            + (brng.sin() * angular.sin() * lat1.cos())
                .atan2(angular.cos() - lat1.sin() * lat2.sin());

        // Fold longitude back into [-180, 180).
        let lon2 = (lon2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
        GeoPoint::new(lat2.to_degrees(), lon2)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Haversine great-circle distance between `a` and `b`, metres.
///
/// Symmetric, and exactly `0.0` when `a == b`.
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Initial bearing (forward azimuth) along the great circle from `a` to `b`.
///
/// Returns degrees in [0, 360), 0 = north, clockwise.  Returns `None` for
/// `a == b`, where the direction is undefined.
pub fn bearing(a: GeoPoint, b: GeoPoint) -> Option<f64> {
    if a == b {
        return None;
    }

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    Some(normalize_degrees(y.atan2(x).to_degrees()))
}

/// Arithmetic mean of the latitudes and longitudes of `ring`.
///
/// Not geodesically correct, but a fine "centre" for a tower footprint or a
/// short way.  Every vertex counts, including a closing vertex that repeats
/// the first one.  Returns `None` when the ring is empty or has fewer than
/// `min_points` vertices.
pub fn centroid(ring: &[GeoPoint], min_points: usize) -> Option<GeoPoint> {
    if ring.is_empty() || ring.len() < min_points {
        return None;
    }

    let (lat_sum, lon_sum) = ring
        .iter()
        .fold((0.0, 0.0), |(lat, lon), p| (lat + p.lat, lon + p.lon));

    let n = ring.len() as f64;
    Some(GeoPoint::new(lat_sum / n, lon_sum / n))
}

/// Fold any finite angle into [0, 360).
///
/// `rem_euclid` can round a tiny negative input up to exactly `360.0`; that
/// case is mapped to `0.0`.
#[inline]
pub fn normalize_degrees(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}
