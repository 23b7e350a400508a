//! `SessionBuilder`: assembles a [`NavigationSession`] from optional parts.

use tc_core::{NavConfig, PointOfInterest};
use tc_heading::HeadingFilter;
use tc_spatial::PoiIndex;

use crate::{NavResult, NavigationSession};

/// Builder for [`NavigationSession`]; every input is optional.
///
/// # Defaults
///
/// | Method               | Default                                  |
/// |----------------------|------------------------------------------|
/// | `.config(c)`         | `NavConfig::default()`                   |
/// | `.points(v)`         | No dataset; session waits in `NoData`    |
/// | `.heading_filter(f)` | `HeadingFilter::from_config(&config)`    |
///
/// # Example
///
/// ```rust,ignore
/// let dataset = load_geojson_path(Path::new("data/wt.geojson"), &DatasetOptions::default())?;
/// let mut session = SessionBuilder::new()
///     .config(NavConfig { update_interval_ms: 250, ..NavConfig::default() })
///     .points(dataset.into_points())
///     .build()?;
/// session.on_location(Timestamp(0), GeoPoint::new(52.07, -0.52), &mut NoopSink);
/// ```
#[derive(Default)]
pub struct SessionBuilder {
    config: Option<NavConfig>,
    points: Option<Vec<PointOfInterest>>,
    filter: Option<HeadingFilter>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: NavConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Supply the point-of-interest set up front.
    pub fn points(mut self, points: Vec<PointOfInterest>) -> Self {
        self.points = Some(points);
        self
    }

    /// Replace the heading filter built from the config.
    pub fn heading_filter(mut self, filter: HeadingFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Validate the config and return a ready-to-use session.
    pub fn build(self) -> NavResult<NavigationSession> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let filter = self
            .filter
            .unwrap_or_else(|| HeadingFilter::from_config(&config));
        let index = self.points.map(PoiIndex::new);

        Ok(NavigationSession::from_parts(config, index, filter))
    }
}
