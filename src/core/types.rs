use serde::{Deserialize, Serialize};

use crate::error::{ClockError, ClockResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Per-draw pixel geometry of the clock face.
///
/// Recomputed from the current viewport on every draw pass so the chart
/// stays correct under resize. Lifetime is one draw call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

/// Spoke lines start at this fraction of the outer radius.
pub const INNER_RADIUS_RATIO: f64 = 0.7;

impl RadialGeometry {
    pub fn from_viewport(viewport: Viewport) -> ClockResult<Self> {
        if !viewport.is_valid() {
            return Err(ClockError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let outer_radius = width.min(height) / 2.0;

        Ok(Self {
            center_x: width / 2.0,
            center_y: height / 2.0,
            outer_radius,
            inner_radius: outer_radius * INNER_RADIUS_RATIO,
        })
    }

    /// Point on the circle of `radius` around the center at `angle` radians.
    #[must_use]
    pub fn point_at(self, angle: f64, radius: f64) -> (f64, f64) {
        (
            self.center_x + radius * angle.cos(),
            self.center_y + radius * angle.sin(),
        )
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        (dx * dx + dy * dy).sqrt() <= self.outer_radius
    }

    pub fn validate(self) -> ClockResult<()> {
        for (name, value) in [
            ("center_x", self.center_x),
            ("center_y", self.center_y),
            ("outer_radius", self.outer_radius),
            ("inner_radius", self.inner_radius),
        ] {
            if !value.is_finite() {
                return Err(ClockError::InvalidGeometry(format!(
                    "radial geometry `{name}` must be finite"
                )));
            }
        }
        if self.outer_radius <= 0.0 || self.inner_radius <= 0.0 {
            return Err(ClockError::InvalidGeometry(
                "radial geometry radii must be > 0".to_owned(),
            ));
        }
        if self.inner_radius >= self.outer_radius {
            return Err(ClockError::InvalidGeometry(
                "inner radius must be smaller than outer radius".to_owned(),
            ));
        }
        Ok(())
    }
}
