use crate::error::{ChartError, ChartResult};

use super::{ChartStyle, MarkerStyle};

pub(super) fn validate_chart_style(style: &ChartStyle) -> ChartResult<()> {
    if let Some(background) = style.background_color {
        background.validate()?;
    }
    for color in [
        style.axis_line_color,
        style.grid_line_color,
        style.tick_label_color,
        style.tooltip_fill_color,
        style.tooltip_border_color,
        style.tooltip_text_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("axis_line_width_px", style.axis_line_width_px),
        ("grid_line_width_px", style.grid_line_width_px),
        ("tick_font_size_px", style.tick_font_size_px),
        ("series_line_width_px", style.series_line_width_px),
        ("hero_line_width_px", style.hero_line_width_px),
        ("tooltip_font_size_px", style.tooltip_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "style `{name}` must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("tick_length_px", style.tick_length_px),
        ("tooltip_corner_radius_px", style.tooltip_corner_radius_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "style `{name}` must be finite and >= 0"
            )));
        }
    }

    validate_opacity("dimmed_series_opacity", style.dimmed_series_opacity)?;
    validate_marker_style(style.marker)
}

fn validate_marker_style(marker: MarkerStyle) -> ChartResult<()> {
    marker.stroke_color.validate()?;
    if !marker.radius_px.is_finite() || marker.radius_px <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "marker radius must be finite and > 0".to_owned(),
        ));
    }
    if !marker.active_radius_px.is_finite() || marker.active_radius_px < marker.radius_px {
        return Err(ChartError::InvalidConfig(
            "active marker radius must be finite and >= marker radius".to_owned(),
        ));
    }
    for value in [marker.stroke_width_px, marker.active_stroke_width_px] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidConfig(
                "marker stroke widths must be finite and >= 0".to_owned(),
            ));
        }
    }
    validate_opacity("marker.dimmed_opacity", marker.dimmed_opacity)
}

fn validate_opacity(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ChartError::InvalidConfig(format!(
            "style `{name}` must be finite and in [0, 1]"
        )));
    }
    Ok(())
}
