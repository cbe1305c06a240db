use crate::core::Viewport;
use crate::error::{ClockError, ClockResult};
use crate::render::{LinePrimitive, TextPrimitive, WedgePrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Wedges draw first, then lines, then texts, so overlay annotations
/// always land on top of the pie.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub wedges: Vec<WedgePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            wedges: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_wedge(mut self, wedge: WedgePrimitive) -> Self {
        self.wedges.push(wedge);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ClockResult<()> {
        if !self.viewport.is_valid() {
            return Err(ClockError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for wedge in &self.wedges {
            wedge.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wedges.is_empty() && self.lines.is_empty() && self.texts.is_empty()
    }
}
