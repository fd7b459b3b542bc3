use crate::error::{ChartError, ChartResult};

use super::{RenderStyle, ScatterConfig};

pub(super) fn validate_render_style(style: RenderStyle) -> ChartResult<RenderStyle> {
    style.mark_fill_color.validate()?;
    style.mark_stroke_color.validate()?;
    style.mark_label_color.validate()?;
    style.axis_line_color.validate()?;
    style.axis_tick_label_color.validate()?;
    style.active_label_color.validate()?;
    style.inactive_label_color.validate()?;
    style.tooltip_background_color.validate()?;
    style.tooltip_text_color.validate()?;

    for (name, value) in [
        ("mark_label_font_size_px", style.mark_label_font_size_px),
        ("axis_line_width", style.axis_line_width),
        (
            "axis_tick_label_font_size_px",
            style.axis_tick_label_font_size_px,
        ),
        ("axis_label_font_size_px", style.axis_label_font_size_px),
        ("tooltip_font_size_px", style.tooltip_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("mark_stroke_width", style.mark_stroke_width),
        ("axis_tick_length_px", style.axis_tick_length_px),
        ("tooltip_padding_px", style.tooltip_padding_px),
        ("tooltip_corner_radius_px", style.tooltip_corner_radius_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and >= 0"
            )));
        }
    }

    Ok(style)
}

pub(super) fn validate_config(config: &ScatterConfig) -> ChartResult<()> {
    if !config.viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }

    let margins = config.margins;
    if [margins.top, margins.right, margins.bottom, margins.left]
        .iter()
        .any(|m| !m.is_finite() || *m < 0.0)
    {
        return Err(ChartError::InvalidData(
            "margins must be finite and >= 0".to_owned(),
        ));
    }

    if !config.plot_area().is_valid() {
        return Err(ChartError::InvalidData(
            "margins leave no room for the plot area".to_owned(),
        ));
    }

    if !config.mark_radius.is_finite() || config.mark_radius <= 0.0 {
        return Err(ChartError::InvalidData(
            "mark radius must be finite and > 0".to_owned(),
        ));
    }

    if config.tick_count == 0 {
        return Err(ChartError::InvalidData(
            "tick count must be > 0".to_owned(),
        ));
    }

    if !config.tooltip_offset.dx.is_finite() || !config.tooltip_offset.dy.is_finite() {
        return Err(ChartError::InvalidData(
            "tooltip offset must be finite".to_owned(),
        ));
    }

    validate_render_style(config.render_style)?;
    Ok(())
}
