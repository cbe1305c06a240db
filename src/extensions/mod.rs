//! Post-draw extension hooks.
//!
//! Overlays contribute primitives after the base pie wedges are built,
//! without mutating engine internals. The built-in clock-labels overlay
//! lives here.

mod clock_labels;
mod overlay;

pub use clock_labels::{
    CLOCK_LABELS_OVERLAY_ID, ClockLabelsConfig, ClockLabelsOverlay, LabelSide, label_side,
};
pub use overlay::{ChartOverlay, OverlayContext};
