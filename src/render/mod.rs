mod animation;
mod frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use animation::{Tween, ease_cubic_in_out, lerp, transition_progress};
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};
pub use svg_renderer::SvgRenderer;

use crate::core::Viewport;
use crate::error::ChartResult;

/// Contract implemented by any drawing host.
///
/// A host owns at most one surface at a time. Backends receive a fully
/// materialized, deterministic `RenderFrame` so drawing code stays isolated
/// from selection and layout logic.
pub trait Renderer {
    /// Creates a fresh surface, replacing nothing: callers remove the old one first.
    fn create_surface(&mut self, viewport: Viewport) -> ChartResult<()>;

    /// Destroys the current surface, if any.
    fn remove_surface(&mut self);

    fn has_surface(&self) -> bool;

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
