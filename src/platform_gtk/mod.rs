//! GTK4 embedding for the clock chart.
//!
//! The adapter owns a `DrawingArea` whose draw callback resizes the
//! engine to the widget's current bounds and renders through the cairo
//! context path. A failed draw pass is logged and skipped; it never
//! panics inside the GTK main loop.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{ChartEngineConfig, ChartSession};
use crate::core::Viewport;
use crate::error::ClockResult;
use crate::interaction::{EraSelection, PointerClick};
use crate::render::CairoRenderer;

type EraSelectedCallback = Box<dyn Fn(&EraSelection)>;
type SharedSession = Rc<RefCell<ChartSession<CairoRenderer>>>;

/// Hosts a chart engine inside a GTK `DrawingArea`.
///
/// Exactly one engine is live per adapter; remounting disposes the
/// previous engine before creating the next one, and dropping the adapter
/// disposes whatever is mounted.
pub struct GtkChartAdapter {
    drawing_area: gtk::DrawingArea,
    session: SharedSession,
    on_era_selected: Rc<RefCell<Option<EraSelectedCallback>>>,
}

impl GtkChartAdapter {
    /// Creates the widget and mounts an engine for `config`.
    pub fn mount(config: ChartEngineConfig) -> ClockResult<Self> {
        let session: SharedSession = Rc::new(RefCell::new(ChartSession::new()));
        session
            .borrow_mut()
            .mount(new_renderer(config.viewport)?, config)?;

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(config.viewport.width as i32);
        drawing_area.set_content_height(config.viewport.height as i32);
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);

        let session_for_draw = Rc::clone(&session);
        drawing_area.set_draw_func(move |_, context, width, height| {
            if width <= 0 || height <= 0 {
                return;
            }
            let mut session = session_for_draw.borrow_mut();
            let Some(engine) = session.engine_mut() else {
                return;
            };
            let viewport = Viewport::new(width as u32, height as u32);
            let outcome = engine
                .resize(viewport)
                .and_then(|()| engine.render_on_cairo_context(context));
            if let Err(err) = outcome {
                warn!(error = %err, "skipping clock draw pass");
            }
        });

        let on_era_selected: Rc<RefCell<Option<EraSelectedCallback>>> =
            Rc::new(RefCell::new(None));
        let gesture = gtk::GestureClick::new();
        let session_for_click = Rc::clone(&session);
        let callback = Rc::clone(&on_era_selected);
        gesture.connect_pressed(move |_, _press_count, x, y| {
            // Resolve before invoking the host callback so a handler that
            // remounts or unmounts does not hit a live session borrow.
            let resolved = {
                let session = session_for_click.borrow();
                let Some(engine) = session.engine() else {
                    return;
                };
                engine.click(PointerClick::new(x, y))
            };
            match resolved {
                Ok(Some(selection)) => {
                    if let Some(handler) = callback.borrow().as_ref() {
                        handler(&selection);
                    }
                }
                Ok(None) => {}
                Err(err) => warn!(error = %err, "click hit test failed"),
            }
        });
        drawing_area.add_controller(gesture);

        Ok(Self {
            drawing_area,
            session,
            on_era_selected,
        })
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.session.borrow().is_mounted()
    }

    /// Disposes the current engine and mounts a fresh one.
    ///
    /// Returns `true` when a previous engine was released.
    pub fn remount(&self, config: ChartEngineConfig) -> ClockResult<bool> {
        let replaced = self
            .session
            .borrow_mut()
            .mount(new_renderer(config.viewport)?, config)?;
        self.drawing_area.queue_draw();
        Ok(replaced)
    }

    /// Disposes the live engine; further draw callbacks become no-ops.
    pub fn unmount(&self) -> bool {
        let released = self.session.borrow_mut().unmount();
        self.drawing_area.queue_draw();
        released
    }

    /// Installs the host callback invoked with the era resolved from a
    /// click on a pie wedge.
    pub fn connect_era_selected(&self, handler: impl Fn(&EraSelection) + 'static) {
        *self.on_era_selected.borrow_mut() = Some(Box::new(handler));
    }
}

impl Drop for GtkChartAdapter {
    fn drop(&mut self) {
        self.session.borrow_mut().unmount();
    }
}

fn new_renderer(viewport: Viewport) -> ClockResult<CairoRenderer> {
    CairoRenderer::new(viewport.width as i32, viewport.height as i32)
}
