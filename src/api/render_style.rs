use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Style contract for every frame the chart renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub mark_fill_color: Color,
    pub mark_stroke_color: Color,
    pub mark_stroke_width: f64,
    pub mark_label_color: Color,
    pub mark_label_font_size_px: f64,
    pub axis_line_color: Color,
    pub axis_line_width: f64,
    pub axis_tick_length_px: f64,
    pub axis_tick_label_color: Color,
    pub axis_tick_label_font_size_px: f64,
    pub active_label_color: Color,
    pub inactive_label_color: Color,
    pub axis_label_font_size_px: f64,
    pub tooltip_background_color: Color,
    pub tooltip_text_color: Color,
    pub tooltip_font_size_px: f64,
    pub tooltip_padding_px: f64,
    pub tooltip_corner_radius_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            mark_fill_color: Color::rgb(0.537, 0.741, 0.827),
            mark_stroke_color: Color::rgb(0.890, 0.890, 0.890),
            mark_stroke_width: 1.0,
            mark_label_color: Color::rgb(1.0, 1.0, 1.0),
            mark_label_font_size_px: 10.0,
            axis_line_color: Color::rgb(0.0, 0.0, 0.0),
            axis_line_width: 1.0,
            axis_tick_length_px: 6.0,
            axis_tick_label_color: Color::rgb(0.0, 0.0, 0.0),
            axis_tick_label_font_size_px: 10.0,
            active_label_color: Color::rgb(0.0, 0.0, 0.0),
            inactive_label_color: Color::rgb(0.667, 0.667, 0.667),
            axis_label_font_size_px: 16.0,
            tooltip_background_color: Color::rgba(0.0, 0.0, 0.0, 0.8),
            tooltip_text_color: Color::rgb(1.0, 1.0, 1.0),
            tooltip_font_size_px: 12.0,
            tooltip_padding_px: 12.0,
            tooltip_corner_radius_px: 2.0,
        }
    }
}
