use std::fmt::Write;

use crate::core::scale::PlotMapper;
use crate::core::series::Series;
use crate::core::types::PixelPoint;

/// One cubic Bézier segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub start: PixelPoint,
    pub control1: PixelPoint,
    pub control2: PixelPoint,
    pub end: PixelPoint,
}

/// Sequence of connected cubic segments. Empty when there is nothing to draw.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathDescription {
    pub segments: Vec<CubicSegment>,
}

impl PathDescription {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn start(&self) -> Option<PixelPoint> {
        self.segments.first().map(|segment| segment.start)
    }

    #[must_use]
    pub fn end(&self) -> Option<PixelPoint> {
        self.segments.last().map(|segment| segment.end)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.segments.iter().all(|segment| {
            [
                segment.start,
                segment.control1,
                segment.control2,
                segment.end,
            ]
            .iter()
            .all(|point| point.x.is_finite() && point.y.is_finite())
        })
    }

    /// SVG `d` attribute with two decimals per coordinate.
    #[must_use]
    pub fn to_svg_data(&self) -> String {
        let Some(start) = self.start() else {
            return String::new();
        };

        let mut data = String::with_capacity(self.segments.len() * 48 + 16);
        // Writing into a String cannot fail.
        let _ = write!(data, "M{:.2},{:.2}", start.x, start.y);
        for segment in &self.segments {
            let _ = write!(
                data,
                " C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
                segment.control1.x,
                segment.control1.y,
                segment.control2.x,
                segment.control2.y,
                segment.end.x,
                segment.end.y
            );
        }
        data
    }
}

/// Builds an interpolating Catmull-Rom curve through `points`.
///
/// Each segment `p1 -> p2` takes its tangents from the neighbours `p0` and
/// `p3`; a missing neighbour at either end is replaced by the endpoint itself.
#[must_use]
pub fn build_path(points: &[PixelPoint]) -> PathDescription {
    if points.len() < 2 {
        return PathDescription::default();
    }

    let last = points.len() - 1;
    let segments = (0..last)
        .map(|index| {
            let p0 = points[index.saturating_sub(1)];
            let p1 = points[index];
            let p2 = points[index + 1];
            let p3 = points[(index + 2).min(last)];

            CubicSegment {
                start: p1,
                control1: PixelPoint::new(p1.x + (p2.x - p0.x) / 6.0, p1.y + (p2.y - p0.y) / 6.0),
                control2: PixelPoint::new(p2.x - (p3.x - p1.x) / 6.0, p2.y - (p3.y - p1.y) / 6.0),
                end: p2,
            }
        })
        .collect();

    PathDescription { segments }
}

/// Maps a series into pixel space and builds its curve. Points the axes
/// cannot place are left out of the curve.
#[must_use]
pub fn build_series_path(series: &Series, mapper: &PlotMapper<'_>) -> PathDescription {
    let pixels: Vec<PixelPoint> = series
        .points()
        .iter()
        .filter_map(|point| mapper.try_map(point))
        .collect();
    build_path(&pixels)
}
