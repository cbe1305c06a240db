use tracing::debug;

use crate::error::ClockResult;
use crate::interaction::SessionState;
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig};

/// Two-state host slot for a chart engine: Idle ⇄ Mounted.
///
/// At most one engine is ever live. `mount` releases any existing engine
/// before creating the next one, so repeated re-mounts cannot leak draw
/// state across renders; the engine is also released on every mount
/// failure path.
pub struct ChartSession<R: Renderer> {
    engine: Option<ChartEngine<R>>,
}

impl<R: Renderer> Default for ChartSession<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Renderer> ChartSession<R> {
    #[must_use]
    pub fn new() -> Self {
        Self { engine: None }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.engine.is_some() {
            SessionState::Mounted
        } else {
            SessionState::Idle
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.engine.is_some()
    }

    /// Mounts a fresh engine, disposing any live one first.
    ///
    /// Returns `true` when a previous engine was released. On error the
    /// session is left Idle (the previous engine is gone either way).
    pub fn mount(&mut self, renderer: R, config: ChartEngineConfig) -> ClockResult<bool> {
        let replaced = self.engine.take().is_some();
        let engine = ChartEngine::new(renderer, config)?;
        self.engine = Some(engine);
        debug!(replaced, "mounted chart engine");
        Ok(replaced)
    }

    /// Unmounts and disposes the live engine. Returns `true` when one was
    /// actually released.
    pub fn unmount(&mut self) -> bool {
        let released = self.engine.take().is_some();
        if released {
            debug!("unmounted chart engine");
        }
        released
    }

    #[must_use]
    pub fn engine(&self) -> Option<&ChartEngine<R>> {
        self.engine.as_ref()
    }

    #[must_use]
    pub fn engine_mut(&mut self) -> Option<&mut ChartEngine<R>> {
        self.engine.as_mut()
    }
}
