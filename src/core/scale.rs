use crate::core::axis::{AxisSpec, ScaleKind};
use crate::core::types::{DataPoint, PixelPoint, PixelRange, PlotRect};

/// Maps a domain value onto `range` through `axis`.
///
/// Never fails. Axes are checked by `AxisSpec::validate` when they enter the
/// engine; a malformed axis reaching this point trips a debug assertion and is
/// clamped in release builds. A zero transformed span is floored to 1.
#[must_use]
pub fn to_pixel(value: f64, axis: &AxisSpec, range: PixelRange) -> f64 {
    debug_assert!(
        axis.validate().is_ok(),
        "to_pixel called with malformed axis: {axis:?}"
    );

    let (min, max, value) = transformed(axis, value);
    let mut span = max - min;
    if span == 0.0 {
        span = 1.0;
    }
    range.start + (value - min) / span * range.span()
}

/// Inverse of [`to_pixel`], used for pointer hit testing.
#[must_use]
pub fn to_domain(pixel: f64, axis: &AxisSpec, range: PixelRange) -> f64 {
    let pixel_span = range.span();
    if pixel_span == 0.0 {
        return axis.domain_min;
    }
    let normalized = (pixel - range.start) / pixel_span;
    let (min, max, _) = transformed(axis, axis.domain_min);
    let value = min + normalized * (max - min);
    match axis.scale_kind {
        ScaleKind::Linear => value,
        ScaleKind::Log10 => 10f64.powf(value),
    }
}

fn transformed(axis: &AxisSpec, value: f64) -> (f64, f64, f64) {
    match axis.scale_kind {
        ScaleKind::Linear => (axis.domain_min, axis.domain_max, value),
        ScaleKind::Log10 => (
            positive_log10(axis.domain_min),
            positive_log10(axis.domain_max),
            positive_log10(value),
        ),
    }
}

fn positive_log10(value: f64) -> f64 {
    value.max(f64::MIN_POSITIVE).log10()
}

/// Maps data points into a plot rectangle through an x and a y axis.
#[derive(Debug, Clone, Copy)]
pub struct PlotMapper<'a> {
    pub x_axis: &'a AxisSpec,
    pub y_axis: &'a AxisSpec,
    pub plot: PlotRect,
}

impl<'a> PlotMapper<'a> {
    #[must_use]
    pub fn new(x_axis: &'a AxisSpec, y_axis: &'a AxisSpec, plot: PlotRect) -> Self {
        Self {
            x_axis,
            y_axis,
            plot,
        }
    }

    #[must_use]
    pub fn x_to_pixel(&self, domain_value: f64) -> f64 {
        to_pixel(domain_value, self.x_axis, self.plot.x_range())
    }

    #[must_use]
    pub fn y_to_pixel(&self, metric_value: f64) -> f64 {
        to_pixel(metric_value, self.y_axis, self.plot.y_range())
    }

    #[must_use]
    pub fn map(&self, point: &DataPoint) -> PixelPoint {
        PixelPoint::new(
            self.x_to_pixel(point.domain_value),
            self.y_to_pixel(point.metric_value),
        )
    }

    /// Like [`PlotMapper::map`], but `None` when either value has no position
    /// on its axis.
    #[must_use]
    pub fn try_map(&self, point: &DataPoint) -> Option<PixelPoint> {
        self.can_place(point).then(|| self.map(point))
    }

    #[must_use]
    pub fn can_place(&self, point: &DataPoint) -> bool {
        self.x_axis.can_place(point.domain_value) && self.y_axis.can_place(point.metric_value)
    }

    #[must_use]
    pub fn x_to_domain(&self, pixel_x: f64) -> f64 {
        to_domain(pixel_x, self.x_axis, self.plot.x_range())
    }
}
