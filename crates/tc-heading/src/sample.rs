//! Heading samples and platform orientation normalisation.
//!
//! Platforms report orientation in different frames.  A heading source turns
//! whatever its platform hands over into a [`HeadingSample`] in [0, 360),
//! clockwise from north, before anything reaches the filter.

use tc_core::normalize_degrees;

use crate::{HeadingError, HeadingResult};

// ── HeadingSample ─────────────────────────────────────────────────────────────

/// A compass heading in degrees, always in [0, 360).
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct HeadingSample(f64);

impl HeadingSample {
    /// Normalise any finite angle into [0, 360).
    pub fn new(degrees: f64) -> HeadingResult<Self> {
        if !degrees.is_finite() {
            return Err(HeadingError::NotFinite(degrees));
        }
        Ok(Self(normalize_degrees(degrees)))
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for HeadingSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

// ── RawOrientation ────────────────────────────────────────────────────────────

/// One orientation reading as delivered by a platform sensor API.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RawOrientation {
    /// Already a compass heading relative to magnetic north (the iOS
    /// `webkitCompassHeading` style).
    CompassHeading(f64),
    /// Device-frame rotation about the z axis, counter-clockwise (the
    /// `alpha` angle of a `deviceorientation` event).
    Alpha(f64),
}

impl RawOrientation {
    /// Convert to a clockwise-from-north heading.
    ///
    /// `alpha_offset_deg` is added to `Alpha` readings only.  Some Android
    /// devices need a further 180° turn; pass it here.
    pub fn to_heading(self, alpha_offset_deg: f64) -> HeadingResult<HeadingSample> {
        match self {
            RawOrientation::CompassHeading(deg) => HeadingSample::new(deg),
            RawOrientation::Alpha(alpha) => {
                if !alpha.is_finite() {
                    return Err(HeadingError::NotFinite(alpha));
                }
                HeadingSample::new(360.0 - alpha + alpha_offset_deg)
            }
        }
    }
}
