//! The `NavigationSession` and its update path.

use tc_core::{GeoPoint, NavConfig, PointOfInterest, Throttle, Timestamp};
use tc_heading::{HeadingFilter, HeadingResult, HeadingSample, RawOrientation};
use tc_spatial::{should_recompute, Dataset, PoiIndex, SpatialResult};

use crate::{
    DisplaySink, NavError, NavResult, NavigationState, NearestCache, Phase, Reading, Sensor,
    SourceError, Status,
};

/// What an update call did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Inputs were merged but the call came too soon after the last
    /// processed one; nothing was recomputed and the sink was not called.
    Throttled,
    /// Derived state was refreshed; the session is now in this phase.
    Processed(Phase),
}

/// Combines position, heading and a point-of-interest set into a continuously
/// updated "bearing + distance to nearest target" reading.
///
/// The host wires its sensor callbacks to [`update`](Self::update) (or the
/// `on_*` shorthands).  Each call:
///
/// 1. **Merge**: store the new position; feed the heading filter and keep the
///    heading it publishes.  This happens on every call.
/// 2. **Throttle**: calls closer than `update_interval_ms` to the previous
///    processed call stop here with [`UpdateOutcome::Throttled`].
/// 3. **Nearest**: if the user moved more than `movement_threshold_m` since
///    the last scan (or there was none), rescan the dataset.
/// 4. **Project**: with position, heading and target all known, build a
///    [`Reading`] and hand it to the sink; otherwise report the waiting phase.
///
/// All mutation goes through `&mut self`; a multi-threaded host shares the
/// session behind a `Mutex`.
///
/// Create via [`NavigationSession::new`] or
/// [`SessionBuilder`][crate::SessionBuilder].
#[derive(Debug)]
pub struct NavigationSession {
    config:   NavConfig,
    /// `None` until a dataset has loaded.
    index:    Option<PoiIndex>,
    filter:   HeadingFilter,
    throttle: Throttle,
    state:    NavigationState,
}

impl NavigationSession {
    /// A session with no dataset yet.  It stays in [`Phase::NoData`] until
    /// [`load_points`](Self::load_points) or
    /// [`load_dataset`](Self::load_dataset) succeeds.
    pub fn new(config: NavConfig) -> NavResult<Self> {
        config.validate()?;
        let filter = HeadingFilter::from_config(&config);
        Ok(Self::from_parts(config, None, filter))
    }

    pub(crate) fn from_parts(config: NavConfig, index: Option<PoiIndex>, filter: HeadingFilter) -> Self {
        Self {
            throttle: Throttle::new(config.update_interval_ms),
            config,
            index,
            filter,
            state: NavigationState::new(),
        }
    }

    // ── Dataset ───────────────────────────────────────────────────────────

    /// Install a point-of-interest set, replacing any earlier one.
    ///
    /// The nearest-target cache and reading are dropped and the phase falls
    /// back to [`Phase::NoData`] until the next processed update rescans.
    pub fn load_points(&mut self, points: Vec<PointOfInterest>) {
        tracing::info!(points = points.len(), "point-of-interest set installed");
        self.index = Some(PoiIndex::new(points));
        self.state.nearest = None;
        self.state.reading = None;
        self.state.phase = Phase::NoData;
    }

    /// Install the result of a dataset load and report it to `sink`.
    ///
    /// On failure the session keeps whatever it had (staying in `NoData` if
    /// nothing was ever loaded) and the error is returned; retrying is up to
    /// the caller.
    pub fn load_dataset<S: DisplaySink>(
        &mut self,
        result: SpatialResult<Dataset>,
        sink:   &mut S,
    ) -> NavResult<usize> {
        match result {
            Ok(dataset) => {
                let points = dataset.points.len();
                self.load_points(dataset.into_points());
                sink.on_status(&Status::DatasetLoaded { points });
                Ok(points)
            }
            Err(e) => {
                tracing::warn!(error = %e, "point-of-interest dataset unavailable");
                sink.on_status(&Status::DatasetUnavailable { reason: e.to_string() });
                Err(NavError::DataUnavailable(e))
            }
        }
    }

    pub fn has_dataset(&self) -> bool {
        self.index.is_some()
    }

    pub fn points(&self) -> Option<&PoiIndex> {
        self.index.as_ref()
    }

    // ── Sensor input ──────────────────────────────────────────────────────

    /// Merge whichever inputs are present and, unless throttled, refresh the
    /// derived state and notify `sink`.
    ///
    /// A location that is not finite or out of range is dropped; the last
    /// good position is kept.
    pub fn update<S: DisplaySink>(
        &mut self,
        now:      Timestamp,
        location: Option<GeoPoint>,
        heading:  Option<HeadingSample>,
        sink:     &mut S,
    ) -> UpdateOutcome {
        if let Some(position) = location {
            match GeoPoint::try_new(position.lat, position.lon) {
                Ok(position) => self.state.position = Some(position),
                Err(e) => tracing::warn!(error = %e, "discarding invalid location fix"),
            }
        }
        if let Some(raw) = heading
            && let Some(published) = self.filter.publish(raw)
        {
            self.state.heading = Some(published);
        }

        if !self.throttle.admit(now) {
            tracing::trace!(%now, "update throttled");
            return UpdateOutcome::Throttled;
        }

        let phase = self.refresh();
        match (&self.state.reading, phase) {
            (Some(reading), Phase::Ready) => sink.on_reading(reading),
            _ => sink.on_waiting(phase),
        }
        UpdateOutcome::Processed(phase)
    }

    /// Location-source callback.
    pub fn on_location<S: DisplaySink>(&mut self, now: Timestamp, position: GeoPoint, sink: &mut S) -> UpdateOutcome {
        self.update(now, Some(position), None, sink)
    }

    /// Heading-source callback for an already-normalised heading.
    pub fn on_heading<S: DisplaySink>(&mut self, now: Timestamp, heading: HeadingSample, sink: &mut S) -> UpdateOutcome {
        self.update(now, None, Some(heading), sink)
    }

    /// Heading-source callback for a raw platform reading.  Applies the
    /// configured `alpha_offset_deg` to device-frame readings.
    pub fn on_orientation<S: DisplaySink>(
        &mut self,
        now:  Timestamp,
        raw:  RawOrientation,
        sink: &mut S,
    ) -> HeadingResult<UpdateOutcome> {
        let heading = raw.to_heading(self.config.alpha_offset_deg)?;
        Ok(self.on_heading(now, heading, sink))
    }

    /// A sensor source failed.  The status is passed to `sink`; the session
    /// keeps its last known values and does not retry.
    pub fn report_source_error<S: DisplaySink>(&mut self, sensor: Sensor, error: SourceError, sink: &mut S) {
        tracing::warn!(%sensor, %error, "sensor source unavailable");
        sink.on_status(&Status::SourceUnavailable { sensor, error });
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn heading_filter(&self) -> &HeadingFilter {
        &self.filter
    }

    /// Change the calibration offset for headings published from now on.
    ///
    /// A non-finite offset is rejected and the current one kept.
    pub fn set_calibration_deg(&mut self, calibration_deg: f64) -> NavResult<()> {
        let config = NavConfig { calibration_deg, ..self.config.clone() };
        config.validate()?;
        self.config = config;
        self.filter.set_calibration_deg(calibration_deg);
        Ok(())
    }

    // ── Derived state ─────────────────────────────────────────────────────

    fn refresh(&mut self) -> Phase {
        let phase = self.derive();
        self.state.phase = phase;
        if !phase.is_ready() {
            self.state.reading = None;
        }
        phase
    }

    fn derive(&mut self) -> Phase {
        let Some(index) = &self.index else {
            return Phase::NoData;
        };

        if let Some(position) = self.state.position
            && should_recompute(self.state.last_computed_at(), position, self.config.movement_threshold_m)
        {
            let target = index
                .find_nearest(position, self.config.max_target_distance_m)
                .map(|hit| {
                    tracing::debug!(
                        poi = %hit.poi.name,
                        distance_m = hit.distance_m,
                        "nearest target recomputed"
                    );
                    hit.poi.clone()
                });
            if target.is_none() {
                tracing::debug!(%position, "no target within range");
            }
            self.state.nearest = Some(NearestCache { computed_at: position, target });
        }

        let (position, heading) = match (self.state.position, self.state.heading) {
            (None, None) => return Phase::NoData,
            (Some(p), Some(h)) => (p, h),
            (p, h) => {
                return Phase::Partial { has_position: p.is_some(), has_heading: h.is_some() };
            }
        };

        let reading = self
            .state
            .nearest_poi()
            .map(|target| Reading::project(position, heading, target));
        match reading {
            Some(reading) => {
                self.state.reading = Some(reading);
                Phase::Ready
            }
            None => Phase::NoTarget,
        }
    }
}
