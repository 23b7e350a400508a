//! Points of interest: the targets the compass points at.

use crate::GeoPoint;

/// A named location loaded from a dataset, such as a water tower.  Read-only
/// once loaded.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOfInterest {
    pub position: GeoPoint,
    pub name:     String,
    /// Free-form grouping label; the tower dataset stores the county here.
    pub category: String,
}

impl PointOfInterest {
    pub fn new(position: GeoPoint, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
            category: category.into(),
        }
    }

    /// Distance from `from` to this point, metres.
    #[inline]
    pub fn distance_from(&self, from: GeoPoint) -> f64 {
        from.distance_m(self.position)
    }
}

impl std::fmt::Display for PointOfInterest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.name, self.category, self.position)
    }
}
