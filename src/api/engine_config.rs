use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{AxisSpec, PlotPadding, TooltipLayout, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HitTestMode;

use super::{ChartStyle, Locale};

/// Public chart bootstrap configuration.
///
/// Serializable so pages can embed chart setup as literal JSON next to the
/// dataset it describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub padding: PlotPadding,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    #[serde(default)]
    pub hit_test_mode: HitTestMode,
    #[serde(default = "default_hit_radius_px")]
    pub hit_radius_px: f64,
    #[serde(default = "default_leave_debounce_ms")]
    pub leave_debounce_ms: u64,
    #[serde(default)]
    pub tooltip: TooltipLayout,
    #[serde(default)]
    pub style: ChartStyle,
    #[serde(default = "default_show_grid")]
    pub show_grid: bool,
    #[serde(default)]
    pub locale: Locale,
}

impl ChartConfig {
    /// Creates a config with default padding, style and interaction tuning.
    #[must_use]
    pub fn new(viewport: Viewport, x_axis: AxisSpec, y_axis: AxisSpec) -> Self {
        Self {
            viewport,
            padding: PlotPadding::default(),
            x_axis,
            y_axis,
            hit_test_mode: HitTestMode::default(),
            hit_radius_px: default_hit_radius_px(),
            leave_debounce_ms: default_leave_debounce_ms(),
            tooltip: TooltipLayout::default(),
            style: ChartStyle::default(),
            show_grid: default_show_grid(),
            locale: Locale::default(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: PlotPadding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_hit_test_mode(mut self, mode: HitTestMode) -> Self {
        self.hit_test_mode = mode;
        self
    }

    #[must_use]
    pub fn with_leave_debounce_ms(mut self, leave_debounce_ms: u64) -> Self {
        self.leave_debounce_ms = leave_debounce_ms;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipLayout) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn leave_debounce(&self) -> Duration {
        Duration::from_millis(self.leave_debounce_ms)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config: {e}"))
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.x_axis.validate()?;
        self.y_axis.validate()?;
        self.tooltip.validate()?;
        if !self.hit_radius_px.is_finite() || self.hit_radius_px <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "hit radius must be finite and > 0".to_owned(),
            ));
        }
        super::validation::validate_chart_style(&self.style)
    }
}

fn default_hit_radius_px() -> f64 {
    12.0
}

fn default_leave_debounce_ms() -> u64 {
    40
}

fn default_show_grid() -> bool {
    true
}
