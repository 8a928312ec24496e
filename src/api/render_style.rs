use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Marker sizing and spotlight dimming.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub radius_px: f64,
    pub active_radius_px: f64,
    pub stroke_width_px: f64,
    pub active_stroke_width_px: f64,
    pub stroke_color: Color,
    /// Opacity of every non-active marker while something is active.
    pub dimmed_opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius_px: 4.0,
            active_radius_px: 7.0,
            stroke_width_px: 1.0,
            active_stroke_width_px: 2.0,
            stroke_color: Color::rgb(1.0, 1.0, 1.0),
            dimmed_opacity: 0.25,
        }
    }
}

/// Colors, strokes and font sizes used by the scene builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    #[serde(default)]
    pub background_color: Option<Color>,
    pub axis_line_color: Color,
    pub axis_line_width_px: f64,
    pub grid_line_color: Color,
    pub grid_line_width_px: f64,
    pub tick_length_px: f64,
    pub tick_label_color: Color,
    pub tick_font_size_px: f64,
    pub series_line_width_px: f64,
    pub hero_line_width_px: f64,
    /// Opacity of series lines not under the active target.
    pub dimmed_series_opacity: f64,
    pub marker: MarkerStyle,
    pub tooltip_fill_color: Color,
    pub tooltip_border_color: Color,
    pub tooltip_text_color: Color,
    pub tooltip_font_size_px: f64,
    pub tooltip_corner_radius_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background_color: None,
            axis_line_color: Color::rgb(0.42, 0.45, 0.5),
            axis_line_width_px: 1.0,
            grid_line_color: Color::rgba(0.42, 0.45, 0.5, 0.25),
            grid_line_width_px: 1.0,
            tick_length_px: 4.0,
            tick_label_color: Color::rgb(0.42, 0.45, 0.5),
            tick_font_size_px: 11.0,
            series_line_width_px: 1.5,
            hero_line_width_px: 3.0,
            dimmed_series_opacity: 0.35,
            marker: MarkerStyle::default(),
            tooltip_fill_color: Color::rgba(0.07, 0.09, 0.13, 0.95),
            tooltip_border_color: Color::rgba(1.0, 1.0, 1.0, 0.15),
            tooltip_text_color: Color::rgb(0.95, 0.96, 0.98),
            tooltip_font_size_px: 12.0,
            tooltip_corner_radius_px: 6.0,
        }
    }
}
