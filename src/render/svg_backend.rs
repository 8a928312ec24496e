use std::fmt::Write;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, LayerPrimitives, LineStrokeStyle, LinePrimitive, PathPrimitive,
    RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub paths_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderer that serializes each frame into a standalone SVG document.
///
/// Layers become `<g>` groups in paint order, so hosts can overlay or style
/// them independently.
#[derive(Debug)]
pub struct SvgRenderer {
    font_family: String,
    background: Option<Color>,
    last_svg: String,
    last_stats: SvgRenderStats,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            font_family: "Inter, system-ui, sans-serif".to_owned(),
            background: None,
            last_svg: String::new(),
            last_stats: SvgRenderStats::default(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    pub fn set_font_family(&mut self, font_family: impl Into<String>) -> ChartResult<()> {
        let font_family = font_family.into();
        if font_family.trim().is_empty() {
            return Err(ChartError::InvalidConfig(
                "svg font family must not be empty".to_owned(),
            ));
        }
        self.font_family = font_family;
        Ok(())
    }

    /// Optional full-viewport fill painted before the first layer.
    pub fn set_background(&mut self, background: Option<Color>) -> ChartResult<()> {
        if let Some(color) = background {
            color.validate()?;
        }
        self.background = background;
        Ok(())
    }

    #[must_use]
    pub fn last_svg(&self) -> &str {
        &self.last_svg
    }

    #[must_use]
    pub fn take_svg(&mut self) -> String {
        std::mem::take(&mut self.last_svg)
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    fn write_document(
        &self,
        frame: &RenderFrame,
        stats: &mut SvgRenderStats,
    ) -> Result<String, std::fmt::Error> {
        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="{}">"#,
            escape_xml(&self.font_family)
        )?;
        if let Some(color) = self.background {
            writeln!(
                out,
                r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}" fill-opacity="{}"/>"#,
                color.to_hex_rgb(),
                fmt_num(color.alpha)
            )?;
        }
        for layer in &frame.layers {
            if layer.is_empty() {
                continue;
            }
            write_layer(&mut out, layer, stats)?;
        }
        out.push_str("</svg>\n");
        Ok(out)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let mut stats = SvgRenderStats::default();
        self.last_svg = self
            .write_document(frame, &mut stats)
            .map_err(|err| ChartError::Render(format!("failed to write svg document: {err}")))?;
        self.last_stats = stats;
        Ok(())
    }
}

fn write_layer(
    out: &mut String,
    layer: &LayerPrimitives,
    stats: &mut SvgRenderStats,
) -> std::fmt::Result {
    writeln!(out, r#"<g id="{}">"#, layer.kind.svg_group_id())?;
    for rect in &layer.rects {
        write_rect(out, rect)?;
        stats.rects_drawn += 1;
    }
    for line in &layer.lines {
        write_line(out, line)?;
        stats.lines_drawn += 1;
    }
    for path in &layer.paths {
        write_path(out, path)?;
        stats.paths_drawn += 1;
    }
    for circle in &layer.circles {
        write_circle(out, circle)?;
        stats.circles_drawn += 1;
    }
    for text in &layer.texts {
        write_text(out, text)?;
        stats.texts_drawn += 1;
    }
    out.push_str("</g>\n");
    Ok(())
}

fn write_rect(out: &mut String, rect: &RectPrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" fill-opacity="{}""#,
        fmt_num(rect.x),
        fmt_num(rect.y),
        fmt_num(rect.width),
        fmt_num(rect.height),
        rect.fill_color.to_hex_rgb(),
        fmt_num(rect.fill_color.alpha)
    )?;
    if rect.corner_radius > 0.0 {
        write!(out, r#" rx="{}""#, fmt_num(rect.corner_radius))?;
    }
    if rect.border_width > 0.0 {
        write!(
            out,
            r#" stroke="{}" stroke-opacity="{}" stroke-width="{}""#,
            rect.border_color.to_hex_rgb(),
            fmt_num(rect.border_color.alpha),
            fmt_num(rect.border_width)
        )?;
    }
    out.push_str("/>\n");
    Ok(())
}

fn write_line(out: &mut String, line: &LinePrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-opacity="{}" stroke-width="{}""#,
        fmt_num(line.x1),
        fmt_num(line.y1),
        fmt_num(line.x2),
        fmt_num(line.y2),
        line.color.to_hex_rgb(),
        fmt_num(line.color.alpha),
        fmt_num(line.stroke_width)
    )?;
    if line.stroke_style == LineStrokeStyle::Dashed {
        out.push_str(r#" stroke-dasharray="4 4""#);
    }
    out.push_str("/>\n");
    Ok(())
}

fn write_path(out: &mut String, path: &PathPrimitive) -> std::fmt::Result {
    writeln!(
        out,
        r#"<path d="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
        path.path.to_svg_data(),
        path.color.to_hex_rgb(),
        fmt_num(path.color.alpha * path.opacity),
        fmt_num(path.stroke_width)
    )
}

fn write_circle(out: &mut String, circle: &CirclePrimitive) -> std::fmt::Result {
    writeln!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}" opacity="{}"/>"#,
        fmt_num(circle.cx),
        fmt_num(circle.cy),
        fmt_num(circle.radius),
        circle.fill_color.to_hex_rgb(),
        circle.stroke_color.to_hex_rgb(),
        fmt_num(circle.stroke_width),
        fmt_num(circle.opacity * circle.fill_color.alpha)
    )
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    writeln!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" fill="{}" fill-opacity="{}" text-anchor="{anchor}">{}</text>"#,
        fmt_num(text.x),
        fmt_num(text.y),
        fmt_num(text.font_size_px),
        text.color.to_hex_rgb(),
        fmt_num(text.color.alpha),
        escape_xml(&text.text)
    )
}

/// Two decimals, trailing zeros trimmed, so output stays byte-stable.
fn fmt_num(value: f64) -> String {
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
