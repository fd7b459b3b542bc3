use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::{Attribute, DataPoint, LinearScale, PlotArea};
use crate::render::{CirclePrimitive, TextHAlign, TextPrimitive, Tween};

use super::RenderStyle;

/// The abbreviation label sits this far (in data units) below the mark centre.
const LABEL_VALUE_OFFSET: f64 = 0.2;

/// Identity of one drawn mark.
///
/// `generation` changes on every redraw, so an id captured before a redraw
/// no longer matches the marks on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkId {
    pub generation: u64,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq)]
struct Mark {
    abbr: String,
    cx: Tween,
    cy: Tween,
    label_y: Tween,
}

impl Mark {
    fn position(&self, now: Duration) -> Option<(f64, f64)> {
        let x = self.cx.value_at(now);
        let y = self.cy.value_at(now);
        (x.is_finite() && y.is_finite()).then_some((x, y))
    }
}

/// Circles plus abbreviation labels, one pair per data point.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkLayer {
    generation: u64,
    marks: Vec<Mark>,
    radius: f64,
    duration: Duration,
}

impl MarkLayer {
    #[must_use]
    pub fn new(radius: f64, duration: Duration) -> Self {
        Self {
            generation: 0,
            marks: Vec::new(),
            radius,
            duration,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Drops every mark. The generation survives so ids from before the
    /// clear never match marks drawn after it.
    pub fn clear(&mut self) {
        self.marks.clear();
        self.generation += 1;
    }

    /// Positions one mark per point at `(x_scale(p[x]), y_scale(p[y]))`.
    ///
    /// The first draw places marks directly; later draws animate every mark
    /// from its displayed position. Returns the new generation.
    pub fn render_marks(
        &mut self,
        points: &[DataPoint],
        x_scale: LinearScale,
        x_attribute: Attribute,
        y_scale: LinearScale,
        y_attribute: Attribute,
        now: Duration,
    ) -> u64 {
        let animate = !self.marks.is_empty();
        let mut hidden = 0usize;

        let marks: Vec<Mark> = points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let x_value = point.value(x_attribute);
                let y_value = point.value(y_attribute);
                let cx = x_scale.map(x_value);
                let cy = y_scale.map(y_value);
                let label_y = y_scale.map(y_value - LABEL_VALUE_OFFSET);
                if !cx.is_finite() || !cy.is_finite() {
                    hidden += 1;
                }

                let previous = self.marks.get(index).filter(|_| animate);
                let tween = |old: Option<Tween>, target: f64| match old {
                    Some(old) if target.is_finite() => old.retarget(target, now, self.duration),
                    _ => Tween::settled(target),
                };
                Mark {
                    abbr: point.abbr.clone(),
                    cx: tween(previous.map(|m| m.cx), cx),
                    cy: tween(previous.map(|m| m.cy), cy),
                    label_y: tween(previous.map(|m| m.label_y), label_y),
                }
            })
            .collect();

        self.marks = marks;
        self.generation += 1;

        if hidden > 0 {
            warn!(
                hidden,
                x = x_attribute.key(),
                y = y_attribute.key(),
                "skipping marks with non-finite coordinates"
            );
        }
        trace!(
            generation = self.generation,
            marks = self.marks.len(),
            animate,
            "render marks"
        );
        self.generation
    }

    /// Plot-local centre of mark `index` as displayed at `now`.
    #[must_use]
    pub fn position(&self, index: usize, now: Duration) -> Option<(f64, f64)> {
        self.marks.get(index).and_then(|mark| mark.position(now))
    }

    /// Plot-local centre mark `index` is moving towards.
    #[must_use]
    pub fn target_position(&self, index: usize) -> Option<(f64, f64)> {
        let mark = self.marks.get(index)?;
        let (x, y) = (mark.cx.target(), mark.cy.target());
        (x.is_finite() && y.is_finite()).then_some((x, y))
    }

    #[must_use]
    pub fn is_transitioning(&self, now: Duration) -> bool {
        self.marks
            .iter()
            .any(|mark| !mark.cx.is_settled(now) || !mark.cy.is_settled(now))
    }

    /// Topmost mark under the surface point `(x, y)`.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64, now: Duration, plot: PlotArea) -> Option<MarkId> {
        let (local_x, local_y) = plot.to_local(x, y);
        self.marks
            .iter()
            .enumerate()
            .rev()
            .find(|(_, mark)| {
                mark.position(now).is_some_and(|(cx, cy)| {
                    let (dx, dy) = (local_x - cx, local_y - cy);
                    dx * dx + dy * dy <= self.radius * self.radius
                })
            })
            .map(|(index, _)| MarkId {
                generation: self.generation,
                index,
            })
    }

    pub fn primitives(
        &self,
        now: Duration,
        plot: PlotArea,
        style: &RenderStyle,
    ) -> (Vec<CirclePrimitive>, Vec<TextPrimitive>) {
        let mut circles = Vec::with_capacity(self.marks.len());
        let mut texts = Vec::with_capacity(self.marks.len());

        for mark in &self.marks {
            let Some((cx, cy)) = mark.position(now) else {
                continue;
            };
            let (sx, sy) = plot.to_surface(cx, cy);
            circles.push(
                CirclePrimitive::new(sx, sy, self.radius, style.mark_fill_color)
                    .with_stroke(style.mark_stroke_width, style.mark_stroke_color),
            );

            let label_y = mark.label_y.value_at(now);
            if mark.abbr.is_empty() || !label_y.is_finite() {
                continue;
            }
            let (_, label_sy) = plot.to_surface(cx, label_y);
            texts.push(
                TextPrimitive::new(
                    mark.abbr.clone(),
                    sx,
                    label_sy,
                    style.mark_label_font_size_px,
                    style.mark_label_color,
                    TextHAlign::Center,
                )
                .with_bold(true),
            );
        }

        (circles, texts)
    }
}
