use serde::{Deserialize, Serialize};

use crate::core::{RadialGeometry, Viewport};
use crate::error::ClockResult;
use crate::render::RenderFrame;

/// Read-only state snapshot passed to overlay hooks.
///
/// The radial geometry is recomputed from the current viewport on every
/// draw pass, so overlays stay correct under resize by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayContext {
    pub viewport: Viewport,
    pub geometry: RadialGeometry,
    pub era_count: usize,
    pub event_count: usize,
}

/// Extension hook interface for bounded post-draw logic.
///
/// Overlays run after the base wedges are in the frame and append their
/// own primitives. They must not assume anything about previous frames.
pub trait ChartOverlay {
    fn id(&self) -> &str;
    fn after_draw(&self, context: &OverlayContext, frame: &mut RenderFrame) -> ClockResult<()>;
}
