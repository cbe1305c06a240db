//! The radial annotation engine: clock hour labels and event spokes.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::core::clock::{ClockScale, HOUR_ANCHORS};
use crate::core::event::{EventList, GeoEvent};
use crate::error::{ClockError, ClockResult};
use crate::extensions::{ChartOverlay, OverlayContext};
use crate::render::{Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

pub const CLOCK_LABELS_OVERLAY_ID: &str = "clock-labels";

/// Tuning for the clock-labels overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockLabelsConfig {
    pub hour_font_size_px: f64,
    pub hour_label_color: Color,
    pub event_font_size_px: f64,
    pub spoke_width_px: f64,
    /// Gap between the spoke's outer endpoint and the label baseline start.
    pub label_offset_px: f64,
}

impl Default for ClockLabelsConfig {
    fn default() -> Self {
        Self {
            hour_font_size_px: 16.0,
            hour_label_color: Color::BLACK,
            event_font_size_px: 10.0,
            spoke_width_px: 2.0,
            label_offset_px: 10.0,
        }
    }
}

impl ClockLabelsConfig {
    fn validate(self) -> ClockResult<Self> {
        for (value, name) in [
            (self.hour_font_size_px, "hour_font_size_px"),
            (self.event_font_size_px, "event_font_size_px"),
            (self.spoke_width_px, "spoke_width_px"),
            (self.label_offset_px, "label_offset_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ClockError::InvalidGeometry(format!(
                    "clock labels config `{name}` must be finite and > 0"
                )));
            }
        }
        self.hour_label_color.validate()?;
        Ok(self)
    }
}

/// Side of the circle a spoke label falls on, which decides how the text
/// grows away from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelSide {
    Left,
    Right,
}

/// Alignment rule for spoke labels: the left half of the circle is the
/// open interval `(π/2, 3π/2)`. Labels there grow leftward (Right
/// alignment) so they never cross back over the pie; at exactly π/2 and
/// 3π/2 the label stays Left-aligned, matching the reference's strict
/// comparisons.
#[must_use]
pub fn label_side(angle: f64) -> LabelSide {
    if angle > FRAC_PI_2 && angle < 3.0 * FRAC_PI_2 {
        LabelSide::Right
    } else {
        LabelSide::Left
    }
}

/// Post-draw overlay adding hour tick labels and per-event radial spokes.
pub struct ClockLabelsOverlay {
    scale: ClockScale,
    events: EventList,
    config: ClockLabelsConfig,
}

impl ClockLabelsOverlay {
    pub fn new(events: EventList, config: ClockLabelsConfig) -> ClockResult<Self> {
        Ok(Self {
            scale: ClockScale::new(),
            events,
            config: config.validate()?,
        })
    }

    pub fn with_default_config(events: EventList) -> ClockResult<Self> {
        Self::new(events, ClockLabelsConfig::default())
    }

    #[must_use]
    pub fn config(&self) -> ClockLabelsConfig {
        self.config
    }

    fn push_hour_labels(&self, context: &OverlayContext, frame: &mut RenderFrame) {
        for anchor in HOUR_ANCHORS {
            let (x, y) = context
                .geometry
                .point_at(anchor.angle, context.geometry.outer_radius);
            frame.texts.push(
                TextPrimitive::new(
                    anchor.hour.to_string(),
                    x,
                    y,
                    self.config.hour_font_size_px,
                    self.config.hour_label_color,
                    TextHAlign::Center,
                ),
            );
        }
    }

    fn push_event_spoke(
        &self,
        event: &GeoEvent,
        context: &OverlayContext,
        frame: &mut RenderFrame,
    ) -> ClockResult<()> {
        let geometry = context.geometry;
        let angle = self.scale.angle_of(event.time_hours)?;

        let (x_inner, y_inner) = geometry.point_at(angle, geometry.inner_radius);
        let (x_outer, y_outer) = geometry.point_at(angle, geometry.outer_radius);
        frame.lines.push(LinePrimitive::new(
            x_inner,
            y_inner,
            x_outer,
            y_outer,
            self.config.spoke_width_px,
            event.color,
        ));

        // The label anchor sits just beyond the spoke's outer endpoint,
        // shifted along the spoke direction so the text clears the line.
        let (side, offset_sign) = match label_side(angle) {
            LabelSide::Right => (TextHAlign::Right, -1.0),
            LabelSide::Left => (TextHAlign::Left, 1.0),
        };
        let offset = offset_sign * self.config.label_offset_px;
        let label_x = x_outer + offset * angle.cos();
        let label_y = y_outer + offset * angle.sin();

        frame.texts.push(
            TextPrimitive::new(
                event.name,
                label_x,
                label_y,
                self.config.event_font_size_px,
                event.color,
                side,
            )
            .with_rotation(angle),
        );
        Ok(())
    }
}

impl ChartOverlay for ClockLabelsOverlay {
    fn id(&self) -> &str {
        CLOCK_LABELS_OVERLAY_ID
    }

    fn after_draw(&self, context: &OverlayContext, frame: &mut RenderFrame) -> ClockResult<()> {
        context.geometry.validate()?;

        self.push_hour_labels(context, frame);
        for event in self.events.events() {
            self.push_event_spoke(event, context, frame)?;
        }
        Ok(())
    }
}
