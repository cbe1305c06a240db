use serde::Serialize;

use crate::core::clock::HOURS_PER_DAY;
use crate::error::{ClockError, ClockResult};
use crate::render::Color;

/// A named, colored, contiguous span on the 24-hour axis.
///
/// Serialize-only: the records are compile-time constants borrowed for the
/// process lifetime, never read back from data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Era {
    pub name: &'static str,
    pub color: Color,
    pub start_hours: f64,
    pub end_hours: f64,
}

impl Era {
    #[must_use]
    pub const fn new(name: &'static str, color: Color, start_hours: f64, end_hours: f64) -> Self {
        Self {
            name,
            color,
            start_hours,
            end_hours,
        }
    }

    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        self.end_hours - self.start_hours
    }

    /// Whether `time` falls inside this span. Spans are half-open except
    /// for the final era, which closes at hour 24.
    #[must_use]
    pub fn contains(&self, time_hours: f64) -> bool {
        if (self.end_hours - HOURS_PER_DAY).abs() < f64::EPSILON {
            time_hours >= self.start_hours && time_hours <= self.end_hours
        } else {
            time_hours >= self.start_hours && time_hours < self.end_hours
        }
    }
}

const CONTIGUITY_EPSILON: f64 = 1e-9;

/// Validated, immutable era table spanning the full `[0, 24]` axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EraTable {
    eras: Vec<Era>,
}

impl EraTable {
    /// Validates contiguity and coverage at construction time.
    ///
    /// The table must start at 0, end at 24, have strictly positive span
    /// durations, and satisfy `era[i].end == era[i + 1].start`.
    pub fn new(eras: Vec<Era>) -> ClockResult<Self> {
        if eras.is_empty() {
            return Err(ClockError::InvalidDataset(
                "era table must not be empty".to_owned(),
            ));
        }

        for era in &eras {
            if !era.start_hours.is_finite() || !era.end_hours.is_finite() {
                return Err(ClockError::InvalidDataset(format!(
                    "era `{}` has non-finite bounds",
                    era.name
                )));
            }
            if era.start_hours < 0.0 || era.end_hours > HOURS_PER_DAY {
                return Err(ClockError::InvalidDataset(format!(
                    "era `{}` lies outside the 24-hour axis",
                    era.name
                )));
            }
            if era.duration_hours() <= 0.0 {
                return Err(ClockError::InvalidDataset(format!(
                    "era `{}` must have positive duration",
                    era.name
                )));
            }
            era.color.validate()?;
        }

        if eras[0].start_hours.abs() > CONTIGUITY_EPSILON {
            return Err(ClockError::InvalidDataset(
                "first era must start at hour 0".to_owned(),
            ));
        }
        let last = &eras[eras.len() - 1];
        if (last.end_hours - HOURS_PER_DAY).abs() > CONTIGUITY_EPSILON {
            return Err(ClockError::InvalidDataset(
                "last era must end at hour 24".to_owned(),
            ));
        }
        for pair in eras.windows(2) {
            if (pair[0].end_hours - pair[1].start_hours).abs() > CONTIGUITY_EPSILON {
                return Err(ClockError::InvalidDataset(format!(
                    "eras `{}` and `{}` are not contiguous",
                    pair[0].name, pair[1].name
                )));
            }
        }

        Ok(Self { eras })
    }

    #[must_use]
    pub fn eras(&self) -> &[Era] {
        &self.eras
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.eras.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.eras.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Era> {
        self.eras.get(index)
    }

    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.eras.iter().map(Era::duration_hours).sum()
    }

    /// Index of the era containing `time`, if the time is on the axis.
    #[must_use]
    pub fn index_at(&self, time_hours: f64) -> Option<usize> {
        self.eras.iter().position(|era| era.contains(time_hours))
    }
}
