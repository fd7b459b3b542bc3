use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PlotArea, format_tick};
use crate::render::{LinePrimitive, TextHAlign, TextPrimitive, lerp, transition_progress};

use super::RenderStyle;

/// Gap between a tick mark's end and its label.
const TICK_LABEL_GAP_PX: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    /// Horizontal axis along the bottom edge, ticks pointing down.
    Bottom,
    /// Vertical axis along the left edge, ticks pointing left.
    Left,
}

/// Primitives produced for one axis in one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisPrimitives {
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

/// One axis (baseline, ticks, tick labels) bound to a scale.
///
/// Updating the scale starts a fire-and-forget transition: tick positions
/// move from where the previous scale put them to where the new scale puts
/// them, new ticks fade in and dropped ticks fade out.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayer {
    orientation: AxisOrientation,
    previous: LinearScale,
    current: LinearScale,
    started_at: Duration,
    duration: Duration,
    tick_count: usize,
}

impl AxisLayer {
    #[must_use]
    pub fn new(orientation: AxisOrientation, scale: LinearScale, tick_count: usize) -> Self {
        Self {
            orientation,
            previous: scale,
            current: scale,
            started_at: Duration::ZERO,
            duration: Duration::ZERO,
            tick_count,
        }
    }

    #[must_use]
    pub fn orientation(&self) -> AxisOrientation {
        self.orientation
    }

    #[must_use]
    pub fn scale(&self) -> LinearScale {
        self.current
    }

    /// Rebinds the axis to `scale`, animating from whatever is displayed at `now`.
    pub fn update(&mut self, scale: LinearScale, now: Duration, duration: Duration) {
        self.previous = self.displayed_scale(now);
        self.current = scale;
        self.started_at = now;
        self.duration = duration;
    }

    #[must_use]
    pub fn is_transitioning(&self, now: Duration) -> bool {
        self.previous != self.current && now < self.started_at + self.duration
    }

    fn progress(&self, now: Duration) -> f64 {
        transition_progress(self.started_at, self.duration, now)
    }

    /// The scale as drawn at `now`: a blend of the previous and current mapping.
    ///
    /// Blending two linear maps pointwise is itself linear, so the result is
    /// expressed over the current domain with an interpolated range.
    #[must_use]
    pub fn displayed_scale(&self, now: Duration) -> LinearScale {
        let t = self.progress(now);
        if t >= 1.0 || self.previous == self.current {
            return self.current;
        }
        let (d0, d1) = self.current.domain();
        let (r0, r1) = self.current.range();
        let range = (
            lerp(self.previous.map(d0), r0, t),
            lerp(self.previous.map(d1), r1, t),
        );
        LinearScale::new((d0, d1), range).unwrap_or(self.current)
    }

    pub fn primitives(&self, now: Duration, plot: PlotArea, style: &RenderStyle) -> AxisPrimitives {
        let t = self.progress(now);
        let displayed = self.displayed_scale(now);
        let mut out = AxisPrimitives::default();

        let (r0, r1) = self.current.range();
        let (x1, y1, x2, y2) = match self.orientation {
            AxisOrientation::Bottom => (r0, plot.height, r1, plot.height),
            AxisOrientation::Left => (0.0, r0, 0.0, r1),
        };
        let (sx1, sy1) = plot.to_surface(x1, y1);
        let (sx2, sy2) = plot.to_surface(x2, y2);
        out.lines.push(LinePrimitive::new(
            sx1,
            sy1,
            sx2,
            sy2,
            style.axis_line_width,
            style.axis_line_color,
        ));

        let current_ticks = self.current.ticks(self.tick_count);
        let current_step = self.current.tick_step(self.tick_count);
        let previous_ticks = if t < 1.0 {
            self.previous.ticks(self.tick_count)
        } else {
            Vec::new()
        };
        let previous_step = self.previous.tick_step(self.tick_count);

        for &value in &current_ticks {
            let opacity = if t >= 1.0 || contains_tick(&previous_ticks, value) {
                1.0
            } else {
                t
            };
            self.push_tick(&mut out, displayed.map(value), value, current_step, opacity, plot, style);
        }

        for &value in &previous_ticks {
            if contains_tick(&current_ticks, value) {
                continue;
            }
            self.push_tick(
                &mut out,
                displayed.map(value),
                value,
                previous_step,
                1.0 - t,
                plot,
                style,
            );
        }

        out
    }

    fn push_tick(
        &self,
        out: &mut AxisPrimitives,
        position: f64,
        value: f64,
        step: f64,
        opacity: f64,
        plot: PlotArea,
        style: &RenderStyle,
    ) {
        if !position.is_finite() || opacity <= 0.0 {
            return;
        }
        let opacity = opacity.min(1.0);
        let line_color = style
            .axis_line_color
            .with_alpha(style.axis_line_color.alpha * opacity);
        let text_color = style
            .axis_tick_label_color
            .with_alpha(style.axis_tick_label_color.alpha * opacity);
        let tick = style.axis_tick_length_px;
        let font = style.axis_tick_label_font_size_px;
        let label = format_tick(value, step);

        let (line, text) = match self.orientation {
            AxisOrientation::Bottom => {
                let (x, y) = plot.to_surface(position, plot.height);
                (
                    (x, y, x, y + tick),
                    TextPrimitive::new(
                        label,
                        x,
                        y + tick + TICK_LABEL_GAP_PX + font,
                        font,
                        text_color,
                        TextHAlign::Center,
                    ),
                )
            }
            AxisOrientation::Left => {
                let (x, y) = plot.to_surface(0.0, position);
                (
                    (x, y, x - tick, y),
                    TextPrimitive::new(
                        label,
                        x - tick - TICK_LABEL_GAP_PX,
                        y + font / 3.0,
                        font,
                        text_color,
                        TextHAlign::Right,
                    ),
                )
            }
        };

        if tick > 0.0 {
            out.lines.push(LinePrimitive::new(
                line.0,
                line.1,
                line.2,
                line.3,
                style.axis_line_width,
                line_color,
            ));
        }
        out.texts.push(text);
    }
}

fn contains_tick(ticks: &[f64], value: f64) -> bool {
    let tolerance = 1e-9 * value.abs().max(1.0);
    ticks.iter().any(|tick| (tick - value).abs() <= tolerance)
}
