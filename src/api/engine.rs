use indexmap::IndexMap;
use tracing::debug;

use crate::core::clock::ClockScale;
use crate::core::{EraTable, EventList, RadialGeometry, Viewport, dataset};
use crate::error::{ClockError, ClockResult};
use crate::extensions::{ChartOverlay, ClockLabelsOverlay, OverlayContext};
use crate::interaction::{EraSelection, PointerClick};
use crate::render::{RenderFrame, Renderer, WedgePrimitive};

use super::{ChartEngineConfig, PieModel};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` coordinates the era/event datasets, the wedge model, the
/// overlay registry, and renderer calls. Pixel geometry is recomputed from
/// the current viewport on every draw pass.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    scale: ClockScale,
    eras: EraTable,
    events: EventList,
    pie: PieModel,
    overlays: IndexMap<String, Box<dyn ChartOverlay>>,
    config: ChartEngineConfig,
}

impl<R: Renderer> std::fmt::Debug for ChartEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartEngine")
            .field("viewport", &self.viewport)
            .field("scale", &self.scale)
            .field("eras", &self.eras)
            .field("events", &self.events)
            .field("pie", &self.pie)
            .field("overlays", &self.overlays.keys().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine over the built-in geological datasets.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ClockResult<Self> {
        Self::with_data(renderer, config, dataset::era_table()?, dataset::event_list()?)
    }

    /// Creates an engine over explicit (already validated) datasets.
    pub fn with_data(
        renderer: R,
        config: ChartEngineConfig,
        eras: EraTable,
        events: EventList,
    ) -> ClockResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ClockError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        let scale = ClockScale::new();
        let pie = PieModel::from_eras(&eras, scale)?;

        let mut engine = Self {
            renderer,
            viewport: config.viewport,
            scale,
            eras,
            events,
            pie,
            overlays: IndexMap::new(),
            config,
        };

        if config.install_clock_labels {
            let overlay =
                ClockLabelsOverlay::new(engine.events.clone(), config.clock_labels)?;
            engine.register_overlay(Box::new(overlay))?;
        }

        Ok(engine)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    #[must_use]
    pub fn eras(&self) -> &EraTable {
        &self.eras
    }

    #[must_use]
    pub fn events(&self) -> &EventList {
        &self.events
    }

    #[must_use]
    pub fn pie(&self) -> &PieModel {
        &self.pie
    }

    /// Updates the viewport; geometry is rebuilt on the next draw pass.
    pub fn resize(&mut self, viewport: Viewport) -> ClockResult<()> {
        if !viewport.is_valid() {
            return Err(ClockError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        Ok(())
    }

    /// Registers an overlay with unique identifier.
    pub fn register_overlay(&mut self, overlay: Box<dyn ChartOverlay>) -> ClockResult<()> {
        let overlay_id = overlay.id().to_owned();
        if overlay_id.is_empty() {
            return Err(ClockError::InvalidConfig(
                "overlay id must not be empty".to_owned(),
            ));
        }
        if self.overlays.contains_key(&overlay_id) {
            return Err(ClockError::InvalidConfig(format!(
                "overlay with id `{overlay_id}` is already registered"
            )));
        }
        self.overlays.insert(overlay_id, overlay);
        Ok(())
    }

    /// Unregisters an overlay by id. Returns `true` when removed.
    pub fn unregister_overlay(&mut self, overlay_id: &str) -> bool {
        self.overlays.shift_remove(overlay_id).is_some()
    }

    #[must_use]
    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    #[must_use]
    pub fn has_overlay(&self, overlay_id: &str) -> bool {
        self.overlays.contains_key(overlay_id)
    }

    /// Builds the backend-agnostic scene for the current viewport: base
    /// wedges first, then every registered overlay in registration order.
    pub fn build_frame(&self) -> ClockResult<RenderFrame> {
        let geometry = RadialGeometry::from_viewport(self.viewport)?;
        geometry.validate()?;

        let mut frame = RenderFrame::new(self.viewport);
        for slice in self.pie.slices() {
            frame.wedges.push(WedgePrimitive::new(
                geometry.center_x,
                geometry.center_y,
                geometry.outer_radius,
                slice.start_angle,
                slice.end_angle,
                slice.color,
            ));
        }

        let context = OverlayContext {
            viewport: self.viewport,
            geometry,
            era_count: self.eras.len(),
            event_count: self.events.len(),
        };
        for overlay in self.overlays.values() {
            overlay.after_draw(&context, &mut frame)?;
        }

        Ok(frame)
    }

    pub fn render(&mut self) -> ClockResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)?;
        debug!(
            wedges = frame.wedges.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "rendered clock frame"
        );
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ClockResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    /// Resolves a pointer press to the era under the cursor.
    ///
    /// Returns `Ok(None)` when the press lands outside the pie disc.
    pub fn click(&self, click: PointerClick) -> ClockResult<Option<EraSelection>> {
        if !click.is_finite() {
            return Err(ClockError::InvalidGeometry(
                "pointer coordinates must be finite".to_owned(),
            ));
        }

        let geometry = RadialGeometry::from_viewport(self.viewport)?;
        let Some(index) = self.pie.wedge_at(click, geometry) else {
            return Ok(None);
        };
        let era = self
            .eras
            .get(index)
            .ok_or_else(|| ClockError::InvalidDataset(format!("no era at index {index}")))?;

        Ok(Some(EraSelection {
            index,
            name: era.name.to_owned(),
            start_hours: era.start_hours,
            end_hours: era.end_hours,
        }))
    }

    #[must_use]
    pub fn clock_scale(&self) -> ClockScale {
        self.scale
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
