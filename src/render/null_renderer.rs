use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless chart usage.
///
/// It still validates frame content and tracks surface lifecycle so tests can
/// catch invalid geometry and duplicate surfaces.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub surface: Option<Viewport>,
    pub surfaces_created: usize,
    pub surfaces_removed: usize,
    pub render_count: usize,
    pub last_line_count: usize,
    pub last_circle_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    /// Surfaces currently alive on this host.
    #[must_use]
    pub fn live_surfaces(&self) -> usize {
        self.surfaces_created - self.surfaces_removed
    }
}

impl Renderer for NullRenderer {
    fn create_surface(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.surface = Some(viewport);
        self.surfaces_created += 1;
        Ok(())
    }

    fn remove_surface(&mut self) {
        if self.surface.take().is_some() {
            self.surfaces_removed += 1;
        }
    }

    fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        if self.surface.is_none() {
            return Err(ChartError::InvalidData(
                "cannot render without a drawing surface".to_owned(),
            ));
        }
        frame.validate()?;
        self.render_count += 1;
        self.last_line_count = frame.lines.len();
        self.last_circle_count = frame.circles.len();
        self.last_rect_count = frame.rects.len() + frame.overlay_rects.len();
        self.last_text_count = frame.texts.len() + frame.overlay_texts.len();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
