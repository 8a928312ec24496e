use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Inner spacing between the viewport edge and the plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPadding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotPadding {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

impl Default for PlotPadding {
    fn default() -> Self {
        Self {
            left: 48.0,
            top: 24.0,
            right: 16.0,
            bottom: 32.0,
        }
    }
}

/// Plot area in SVG pixel space (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_viewport(viewport: Viewport, padding: PlotPadding) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let rect = Self {
            left: padding.left,
            top: padding.top,
            right: f64::from(viewport.width) - padding.right,
            bottom: f64::from(viewport.height) - padding.bottom,
        };
        rect.validate()?;
        Ok(rect)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Horizontal pixel range, left to right.
    #[must_use]
    pub fn x_range(self) -> PixelRange {
        PixelRange::new(self.left, self.right)
    }

    /// Vertical pixel range, bottom to top, so larger metrics sit higher.
    #[must_use]
    pub fn y_range(self) -> PixelRange {
        PixelRange::new(self.bottom, self.top)
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.left.is_finite()
            || !self.top.is_finite()
            || !self.right.is_finite()
            || !self.bottom.is_finite()
        {
            return Err(ChartError::InvalidData(
                "plot rect edges must be finite".to_owned(),
            ));
        }
        if self.right <= self.left || self.bottom <= self.top {
            return Err(ChartError::InvalidData(
                "plot rect must have positive width and height".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Target pixel interval of one axis. `start` may exceed `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRange {
    pub start: f64,
    pub end: f64,
}

impl PixelRange {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(String);

impl SeriesId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeriesId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SeriesId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One immutable sample: a domain value (x) and the metric measured there (y).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub domain_value: f64,
    pub metric_value: f64,
    pub series_id: SeriesId,
}

impl DataPoint {
    pub fn new(
        domain_value: f64,
        metric_value: f64,
        series_id: impl Into<SeriesId>,
    ) -> ChartResult<Self> {
        let point = Self {
            domain_value,
            metric_value,
            series_id: series_id.into(),
        };
        point.validate()?;
        Ok(point)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.domain_value.is_finite() || !self.metric_value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "data point in series `{}` must have finite values",
                self.series_id
            )));
        }
        Ok(())
    }
}
