use std::fmt::Write as _;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

/// Renders frames into a standalone SVG document kept in memory.
///
/// Each `render` call replaces the previous document, mirroring a surface
/// that is fully redrawn every pass.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    surface: Option<Viewport>,
    document: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rendered document, if a surface exists and was drawn into.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl Renderer for SvgRenderer {
    fn create_surface(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.surface = Some(viewport);
        self.document = None;
        Ok(())
    }

    fn remove_surface(&mut self) {
        self.surface = None;
        self.document = None;
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
        self.document = Some(write_document(frame));
        Ok(())
    }
}

fn write_document(frame: &RenderFrame) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = frame.viewport.width,
        h = frame.viewport.height,
    );

    for line in &frame.lines {
        let _ = writeln!(
            out,
            r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
            line.x1,
            line.y1,
            line.x2,
            line.y2,
            svg_color(line.color),
            line.stroke_width,
        );
    }

    for circle in &frame.circles {
        let _ = writeln!(
            out,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            circle.cx,
            circle.cy,
            circle.radius,
            svg_color(circle.fill_color),
            svg_color(circle.stroke_color),
            circle.stroke_width,
        );
    }

    for rect in &frame.rects {
        write_rect(&mut out, rect);
    }
    for text in &frame.texts {
        write_text(&mut out, text);
    }
    for rect in &frame.overlay_rects {
        write_rect(&mut out, rect);
    }
    for text in &frame.overlay_texts {
        write_text(&mut out, text);
    }

    out.push_str("</svg>\n");
    out
}

fn write_rect(out: &mut String, rect: &RectPrimitive) {
    let _ = writeln!(
        out,
        r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        rect.corner_radius,
        svg_color(rect.fill_color),
        svg_color(rect.border_color),
        rect.border_width,
    );
}

fn write_text(out: &mut String, text: &TextPrimitive) {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let transform = if text.rotation_deg == 0.0 {
        String::new()
    } else {
        format!(
            r#" transform="rotate({} {:.2} {:.2})""#,
            text.rotation_deg, text.x, text.y
        )
    };
    let weight = if text.bold { "bold" } else { "normal" };
    let _ = writeln!(
        out,
        r#"  <text x="{:.2}" y="{:.2}" font-size="{}" font-weight="{weight}" text-anchor="{anchor}" fill="{}"{transform}>{}</text>"#,
        text.x,
        text.y,
        text.font_size_px,
        svg_color(text.color),
        escape_text(&text.text),
    );
}

fn svg_color(color: Color) -> String {
    let channel = |value: f64| (value * 255.0).round() as u8;
    format!(
        "rgba({},{},{},{})",
        channel(color.red),
        channel(color.green),
        channel(color.blue),
        color.alpha
    )
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CirclePrimitive;

    #[test]
    fn writes_marks_and_escaped_text() {
        let mut renderer = SvgRenderer::new();
        renderer
            .create_surface(Viewport::new(680, 500))
            .expect("surface");
        let frame = RenderFrame::new(Viewport::new(680, 500))
            .with_circle(CirclePrimitive::new(10.0, 20.0, 14.0, Color::rgb(0.5, 0.7, 0.8)))
            .with_text(
                TextPrimitive::new("A&B", 10.0, 20.0, 10.0, Color::rgb(1.0, 1.0, 1.0), TextHAlign::Center)
                    .with_rotation(-90.0),
            );
        renderer.render(&frame).expect("render");

        let doc = renderer.document().expect("document");
        assert!(doc.starts_with("<svg"));
        assert!(doc.contains(r#"<circle cx="10.00" cy="20.00" r="14""#));
        assert!(doc.contains("A&amp;B"));
        assert!(doc.contains("rotate(-90 10.00 20.00)"));
    }

    #[test]
    fn rendering_requires_a_surface() {
        let mut renderer = SvgRenderer::new();
        let frame = RenderFrame::new(Viewport::new(10, 10));
        assert!(renderer.render(&frame).is_err());
    }
}
