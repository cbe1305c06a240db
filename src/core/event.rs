use serde::Serialize;

use crate::core::clock::HOURS_PER_DAY;
use crate::error::{ClockError, ClockResult};
use crate::render::Color;

/// A named, colored point-in-time marker on the 24-hour axis.
///
/// Serialize-only for the same reason as `Era`: the records are
/// compile-time constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoEvent {
    pub name: &'static str,
    pub color: Color,
    pub time_hours: f64,
    pub description: &'static str,
}

impl GeoEvent {
    #[must_use]
    pub const fn new(
        name: &'static str,
        color: Color,
        time_hours: f64,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            color,
            time_hours,
            description,
        }
    }

    /// Display form used by event listings: "21 hours and 25 minutes".
    ///
    /// Minutes are `round(frac · 60)` with halves away from zero, matching
    /// the reference display rule exactly (including its 60-minute artifact
    /// for times just below a full hour).
    #[must_use]
    pub fn clock_label(&self) -> String {
        let whole_hours = self.time_hours.floor() as i64;
        let minutes = (self.time_hours.fract() * 60.0).round() as i64;
        format!("{whole_hours} hours and {minutes} minutes")
    }

    /// List entry form: "Cambrian Explosion: 21 hours and 25 minutes".
    #[must_use]
    pub fn list_label(&self) -> String {
        format!("{}: {}", self.name, self.clock_label())
    }
}

/// Validated event list.
///
/// Event times must lie on the axis; chronological ordering across the
/// list is expected for legibility but intentionally not enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventList {
    events: Vec<GeoEvent>,
}

impl EventList {
    pub fn new(events: Vec<GeoEvent>) -> ClockResult<Self> {
        for event in &events {
            if !event.time_hours.is_finite()
                || event.time_hours < 0.0
                || event.time_hours > HOURS_PER_DAY
            {
                return Err(ClockError::InvalidDataset(format!(
                    "event `{}` must lie within the 24-hour axis",
                    event.name
                )));
            }
            event.color.validate()?;
        }
        Ok(Self { events })
    }

    #[must_use]
    pub fn events(&self) -> &[GeoEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
