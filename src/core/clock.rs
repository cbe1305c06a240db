//! Time-to-angle mapping for the 24-hour clock face.
//!
//! Two angle conventions coexist on purpose. Event spokes and pie wedges
//! use the offset mapping of [`ClockScale`], where hour 0 points to the
//! top of the circle and time proceeds clockwise. The static hour labels
//! use the hardcoded non-offset anchors in [`HOUR_ANCHORS`]. The reference
//! rendering relies on both; do not unify them.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::{ClockError, ClockResult};

/// Full span of the clock axis in hours.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Maps fractional hours on `[0, 24]` to radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockScale;

impl ClockScale {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// `angle = (time / 24) * 2π − π/2`.
    ///
    /// Monotonic over `[0, 24]`: `angle_of(0) = −π/2` (top of circle),
    /// `angle_of(6) = 0` (3 o'clock), `angle_of(24) = 3π/2`.
    pub fn angle_of(self, time_hours: f64) -> ClockResult<f64> {
        if !time_hours.is_finite() {
            return Err(ClockError::InvalidGeometry(
                "time must be finite".to_owned(),
            ));
        }
        Ok((time_hours / HOURS_PER_DAY) * TAU - FRAC_PI_2)
    }

    /// Inverse of [`ClockScale::angle_of`], used by wedge hit testing.
    ///
    /// Expects an angle in `[−π/2, 3π/2)` and returns hours in `[0, 24)`.
    pub fn time_at(self, angle: f64) -> ClockResult<f64> {
        if !angle.is_finite() {
            return Err(ClockError::InvalidGeometry(
                "angle must be finite".to_owned(),
            ));
        }
        Ok((angle + FRAC_PI_2) / TAU * HOURS_PER_DAY)
    }

    /// Normalizes an `atan2` result into the `[−π/2, 3π/2)` range used by
    /// [`ClockScale::angle_of`] outputs.
    #[must_use]
    pub fn normalize_pointer_angle(self, angle: f64) -> f64 {
        let mut normalized = angle;
        while normalized < -FRAC_PI_2 {
            normalized += TAU;
        }
        while normalized >= 3.0 * FRAC_PI_2 {
            normalized -= TAU;
        }
        normalized
    }
}

/// One static hour label anchor in the non-offset convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourAnchor {
    pub hour: u8,
    pub angle: f64,
}

/// Fixed anchors for the 6/12/18/24 hour labels.
///
/// These angles deliberately lack the −π/2 offset of [`ClockScale`]; the
/// label positions match the reference rendering, not the spoke mapping.
pub const HOUR_ANCHORS: [HourAnchor; 4] = [
    HourAnchor {
        hour: 6,
        angle: FRAC_PI_2,
    },
    HourAnchor { hour: 12, angle: PI },
    HourAnchor {
        hour: 18,
        angle: 3.0 * FRAC_PI_2,
    },
    HourAnchor {
        hour: 24,
        angle: 0.0,
    },
];
