use serde::{Deserialize, Serialize};

/// Lifecycle state of a chart host slot.
///
/// Exactly one engine may be live per mounted view; the session moves to
/// `Mounted` on a successful mount and back to `Idle` on unmount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Idle,
    Mounted,
}

/// One pointer press in viewport pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerClick {
    pub x: f64,
    pub y: f64,
}

impl PointerClick {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Era resolved from a click on a pie wedge, surfaced to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EraSelection {
    pub index: usize,
    pub name: String,
    pub start_hours: f64,
    pub end_hours: f64,
}

impl EraSelection {
    /// Two-decimal bounds display: "14.50 - 23.00 hours".
    #[must_use]
    pub fn bounds_label(&self) -> String {
        format!("{:.2} - {:.2} hours", self.start_hours, self.end_hours)
    }

    /// Full summary line: "Proterozoic: 14.50 - 23.00 hours".
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}: {}", self.name, self.bounds_label())
    }

    /// Tooltip form showing the wedge magnitude: "Proterozoic: 8.50 hours".
    #[must_use]
    pub fn duration_label(&self) -> String {
        format!("{}: {:.2} hours", self.name, self.end_hours - self.start_hours)
    }
}
