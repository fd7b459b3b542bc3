use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Attribute, DataPoint};
use crate::render::{RectPrimitive, TextHAlign, TextPrimitive};

use super::{MarkId, RenderStyle, TooltipOffset};

/// Rough glyph advance as a fraction of the font size, for sizing the popup.
const GLYPH_WIDTH_RATIO: f64 = 0.6;
const LINE_HEIGHT_RATIO: f64 = 1.2;

/// Contents and placement of the visible popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub mark: MarkId,
    pub state: String,
    pub x_attribute: Attribute,
    pub x_value: f64,
    pub y_attribute: Attribute,
    pub y_value: f64,
    /// Surface point the popup's bottom edge is centred on.
    pub anchor_x: f64,
    pub anchor_y: f64,
}

impl Tooltip {
    #[must_use]
    pub fn lines(&self) -> [String; 3] {
        [
            self.state.clone(),
            format!("{}: {}", self.x_attribute.key(), self.x_value),
            format!("{}: {}", self.y_attribute.key(), self.y_value),
        ]
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}

/// Handler set bound to one generation of marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TooltipBinding {
    generation: u64,
    x_attribute: Attribute,
    y_attribute: Attribute,
}

/// Shows and hides the popup for the mark under the pointer.
///
/// Handlers only fire for the mark generation they were attached to; the
/// chart must call [`TooltipController::attach`] after every mark redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipController {
    binding: Option<TooltipBinding>,
    visible: Option<Tooltip>,
    offset: TooltipOffset,
}

impl TooltipController {
    #[must_use]
    pub fn new(offset: TooltipOffset) -> Self {
        Self {
            binding: None,
            visible: None,
            offset,
        }
    }

    /// Binds handlers to `generation`, replacing any previous binding and
    /// hiding a popup that was built from it.
    pub fn attach(&mut self, generation: u64, x_attribute: Attribute, y_attribute: Attribute) {
        self.binding = Some(TooltipBinding {
            generation,
            x_attribute,
            y_attribute,
        });
        self.visible = None;
    }

    pub fn detach(&mut self) {
        self.binding = None;
        self.visible = None;
    }

    #[must_use]
    pub fn attached_generation(&self) -> Option<u64> {
        self.binding.map(|binding| binding.generation)
    }

    #[must_use]
    pub fn visible(&self) -> Option<&Tooltip> {
        self.visible.as_ref()
    }

    /// Handles pointer-enter on `mark` whose displayed centre is `(cx, cy)`
    /// in surface coordinates.
    ///
    /// Returns `false` when no handler is bound to the mark's generation.
    pub fn pointer_enter(
        &mut self,
        mark: MarkId,
        points: &[DataPoint],
        center: (f64, f64),
        radius: f64,
    ) -> bool {
        let Some(binding) = self
            .binding
            .filter(|binding| binding.generation == mark.generation)
        else {
            trace!(
                mark_generation = mark.generation,
                attached = ?self.attached_generation(),
                "dropping pointer-enter on unbound mark"
            );
            return false;
        };
        let Some(point) = points.get(mark.index) else {
            return false;
        };

        let (cx, cy) = center;
        self.visible = Some(Tooltip {
            mark,
            state: point.state.clone(),
            x_attribute: binding.x_attribute,
            x_value: point.value(binding.x_attribute),
            y_attribute: binding.y_attribute,
            y_value: point.value(binding.y_attribute),
            anchor_x: cx + self.offset.dx,
            anchor_y: cy - radius + self.offset.dy,
        });
        true
    }

    /// Hides the popup. Returns whether one was visible.
    pub fn pointer_leave(&mut self) -> bool {
        self.visible.take().is_some()
    }

    pub fn primitives(&self, style: &RenderStyle) -> Option<(RectPrimitive, Vec<TextPrimitive>)> {
        let tooltip = self.visible.as_ref()?;
        if !tooltip.anchor_x.is_finite() || !tooltip.anchor_y.is_finite() {
            return None;
        }

        let lines = tooltip.lines();
        let font = style.tooltip_font_size_px;
        let padding = style.tooltip_padding_px;
        let line_height = font * LINE_HEIGHT_RATIO;
        let longest = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let width = longest as f64 * font * GLYPH_WIDTH_RATIO + 2.0 * padding;
        let height = lines.len() as f64 * line_height + 2.0 * padding;
        let left = tooltip.anchor_x - width / 2.0;
        let top = tooltip.anchor_y - height;

        let rect = RectPrimitive::new(left, top, width, height, style.tooltip_background_color)
            .with_corner_radius(style.tooltip_corner_radius_px);
        // Empty rows keep their slot so the remaining lines do not shift.
        let texts = lines
            .into_iter()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(row, line)| {
                TextPrimitive::new(
                    line,
                    tooltip.anchor_x,
                    top + padding + font + row as f64 * line_height,
                    font,
                    style.tooltip_text_color,
                    TextHAlign::Center,
                )
                .with_bold(true)
            })
            .collect();

        Some((rect, texts))
    }
}
