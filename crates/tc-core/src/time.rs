//! Session time model.
//!
//! # Design
//!
//! The core never reads a clock.  Hosts stamp every sensor callback with a
//! monotonic [`Timestamp`] (milliseconds since an arbitrary origin, usually
//! session start) and pass it in.  This keeps throttling deterministic under
//! test and independent of any event-loop API.

use std::fmt;
use std::time::Duration;

// ── Timestamp ─────────────────────────────────────────────────────────────────

/// Monotonic millisecond timestamp.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    /// Build from the elapsed time since the host's chosen origin.
    #[inline]
    pub fn from_elapsed(elapsed: Duration) -> Timestamp {
        Timestamp(elapsed.as_millis() as u64)
    }

    /// Milliseconds elapsed from `earlier` to `self`, saturating at zero if
    /// the host hands in out-of-order stamps.
    #[inline]
    pub fn millis_since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: u64) -> Timestamp {
        Timestamp(self.0 + rhs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── Throttle ──────────────────────────────────────────────────────────────────

/// Minimum-interval rate limiter.
///
/// A call to [`admit`](Self::admit) less than `interval_ms` after the last
/// admitted call is rejected.  Rejected calls are dropped, never queued.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval_ms:   u64,
    last_admitted: Option<Timestamp>,
}

impl Throttle {
    pub fn new(interval_ms: u64) -> Self {
        Self { interval_ms, last_admitted: None }
    }

    /// `true` (and records `now`) if enough time has passed since the last
    /// admitted call.  The first call is always admitted.
    pub fn admit(&mut self, now: Timestamp) -> bool {
        if let Some(last) = self.last_admitted
            && now.millis_since(last) < self.interval_ms
        {
            return false;
        }
        self.last_admitted = Some(now);
        true
    }

    #[inline]
    pub fn last_admitted(&self) -> Option<Timestamp> {
        self.last_admitted
    }
}
