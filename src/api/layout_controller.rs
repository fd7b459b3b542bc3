use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Margins, PlotArea, Viewport};
use crate::error::ChartResult;
use crate::render::Renderer;

/// Fixed surface geometry for one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub margins: Margins,
    pub plot: PlotArea,
}

impl ChartLayout {
    #[must_use]
    pub fn new(viewport: Viewport, margins: Margins) -> Self {
        Self {
            viewport,
            margins,
            plot: PlotArea::from_viewport(viewport, margins),
        }
    }
}

/// Proof that a rebuild was started; only the newest ticket may finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PipelineTicket {
    generation: u64,
}

impl PipelineTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Owns the drawing surface lifecycle.
///
/// Every rebuild destroys the old surface outright and creates a new one of
/// the same logical size; nothing is reflowed incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutController {
    layout: ChartLayout,
    generation: u64,
}

impl LayoutController {
    #[must_use]
    pub fn new(layout: ChartLayout) -> Self {
        Self {
            layout,
            generation: 0,
        }
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    /// Number of rebuilds started so far.
    #[must_use]
    pub fn rebuild_count(&self) -> u64 {
        self.generation
    }

    /// Tears down any existing surface and creates a fresh one.
    pub fn begin_rebuild<R: Renderer>(&mut self, renderer: &mut R) -> ChartResult<PipelineTicket> {
        if renderer.has_surface() {
            renderer.remove_surface();
            debug!(generation = self.generation, "removed previous drawing surface");
        }
        renderer.create_surface(self.layout.viewport)?;
        self.generation += 1;
        debug!(
            generation = self.generation,
            width = self.layout.viewport.width,
            height = self.layout.viewport.height,
            "created drawing surface"
        );
        Ok(PipelineTicket {
            generation: self.generation,
        })
    }

    #[must_use]
    pub fn is_current(&self, ticket: PipelineTicket) -> bool {
        ticket.generation == self.generation
    }
}
