//! SVG document backend.
//!
//! Emits a standalone `<svg>` element with the fixed viewBox and
//! `preserveAspectRatio="xMinYMin meet"` scaling, ready for injection into a
//! host page container.

use std::fmt::Write as _;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign, TextPrimitive};

/// Renderer that materializes each frame as an SVG document string.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_document: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The document produced by the most recent `render` call.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.last_document.as_deref()
    }

    /// Builds an SVG document for one frame without retaining it.
    pub fn render_to_string(frame: &RenderFrame) -> ChartResult<String> {
        frame.validate()?;

        let mut svg = String::new();
        let write_error =
            |_| ChartError::InvalidData("failed to build svg document".to_owned());

        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="xMinYMin meet" viewBox="0 0 {} {}" class="svg-content">"#,
            frame.viewport.width, frame.viewport.height
        )
        .map_err(write_error)?;

        for rect in &frame.rects {
            writeln!(
                svg,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" fill-opacity="{}"/>"#,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                rect.corner_radius,
                css_color(rect.fill),
                rect.fill.alpha
            )
            .map_err(write_error)?;
        }

        for line in &frame.lines {
            writeln!(
                svg,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                css_color(line.color),
                line.color.alpha,
                line.stroke_width
            )
            .map_err(write_error)?;
        }

        for circle in &frame.circles {
            writeln!(
                svg,
                r#"  <circle cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="{}"/>"#,
                circle.cx,
                circle.cy,
                circle.radius,
                css_color(circle.fill),
                circle.fill.alpha
            )
            .map_err(write_error)?;
        }

        for text in &frame.texts {
            writeln!(svg, "  {}", text_element(text)).map_err(write_error)?;
        }

        svg.push_str("</svg>\n");
        Ok(svg)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        self.last_document = Some(Self::render_to_string(frame)?);
        Ok(())
    }
}

fn css_color(color: Color) -> String {
    format!(
        "rgb({},{},{})",
        (color.red * 255.0).round() as u8,
        (color.green * 255.0).round() as u8,
        (color.blue * 255.0).round() as u8
    )
}

fn text_element(text: &TextPrimitive) -> String {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let transform = if text.rotation_deg != 0.0 {
        format!(r#" transform="rotate({})""#, text.rotation_deg)
    } else {
        String::new()
    };
    let weight = if text.bold { r#" font-weight="bold""# } else { "" };

    format!(
        r#"<text x="{}" y="{}" font-size="{}" font-family="sans-serif" fill="{}" fill-opacity="{}" text-anchor="{anchor}"{weight}{transform}>{}</text>"#,
        text.x,
        text.y,
        text.font_size_px,
        css_color(text.color),
        text.color.alpha,
        escape_xml(&text.text)
    )
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_xml;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_xml("A & B <C>"), "A &amp; B &lt;C&gt;");
    }
}
