use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, PlotMapper, Series, SeriesId};
use crate::interaction::PointTarget;
use crate::render::Color;

/// One series value shown in the tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipEntry {
    pub series_id: SeriesId,
    pub label: String,
    pub color: Color,
    pub highlighted: bool,
    pub domain_value: f64,
    pub metric_value: f64,
    pub pixel: PixelPoint,
}

/// The hovered or pinned target resolved against the current data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveDatum {
    pub target: PointTarget,
    /// Point the tooltip hangs from: the marker itself, or the highest marker
    /// of a column.
    pub anchor: PixelPoint,
    pub entries: Vec<TooltipEntry>,
}

impl ActiveDatum {
    /// Returns `None` when no current point matches `target`, for example after
    /// the data changed underneath a pin.
    #[must_use]
    pub fn resolve<'a>(
        target: &PointTarget,
        series: impl IntoIterator<Item = &'a Series>,
        mapper: &PlotMapper<'_>,
    ) -> Option<Self> {
        let entries: Vec<TooltipEntry> = series
            .into_iter()
            .filter(|series| {
                target
                    .series_id
                    .as_ref()
                    .is_none_or(|id| id == series.id())
            })
            .filter_map(|series| {
                let point = series.point_at(target.domain_value)?;
                let pixel = mapper.try_map(point)?;
                Some(TooltipEntry {
                    series_id: series.id().clone(),
                    label: series.label().to_owned(),
                    color: series.color(),
                    highlighted: series.is_highlighted(),
                    domain_value: point.domain_value,
                    metric_value: point.metric_value,
                    pixel,
                })
            })
            .collect();

        let anchor_y = entries
            .iter()
            .map(|entry| entry.pixel.y)
            .reduce(f64::min)?;
        let anchor = PixelPoint::new(mapper.x_to_pixel(target.domain_value), anchor_y);

        Some(Self {
            target: target.clone(),
            anchor,
            entries,
        })
    }
}
