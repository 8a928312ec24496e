use serde::{Deserialize, Serialize};

use crate::core::types::{DataPoint, SeriesId};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Named, ordered run of points sharing one color.
///
/// Domain values are strictly increasing; the constructor enforces it so the
/// path builder can rely on a monotonic x axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeriesSpec", into = "SeriesSpec")]
pub struct Series {
    id: SeriesId,
    label: String,
    color: Color,
    highlighted: bool,
    points: Vec<DataPoint>,
}

impl Series {
    pub fn new(
        id: impl Into<SeriesId>,
        label: impl Into<String>,
        color: Color,
        points: Vec<DataPoint>,
    ) -> ChartResult<Self> {
        let series = Self {
            id: id.into(),
            label: label.into(),
            color,
            highlighted: false,
            points,
        };
        series.validate()?;
        Ok(series)
    }

    /// Builds a series from `(domain, metric)` pairs.
    pub fn from_pairs(
        id: impl Into<SeriesId>,
        label: impl Into<String>,
        color: Color,
        pairs: &[(f64, f64)],
    ) -> ChartResult<Self> {
        let id = id.into();
        let points = pairs
            .iter()
            .map(|&(domain, metric)| DataPoint::new(domain, metric, id.clone()))
            .collect::<ChartResult<Vec<_>>>()?;
        Self::new(id, label, color, points)
    }

    /// Marks this series as the hero series, drawn last and most prominently.
    #[must_use]
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    #[must_use]
    pub fn id(&self) -> &SeriesId {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Point with exactly this domain value, if any.
    #[must_use]
    pub fn point_at(&self, domain_value: f64) -> Option<&DataPoint> {
        self.points
            .binary_search_by(|point| point.domain_value.total_cmp(&domain_value))
            .ok()
            .map(|index| &self.points[index])
    }

    fn validate(&self) -> ChartResult<()> {
        if self.id.as_str().is_empty() {
            return Err(ChartError::InvalidData(
                "series id must not be empty".to_owned(),
            ));
        }
        self.color.validate()?;
        for point in &self.points {
            point.validate()?;
            if point.series_id != self.id {
                return Err(ChartError::InvalidData(format!(
                    "point tagged `{}` cannot belong to series `{}`",
                    point.series_id, self.id
                )));
            }
        }
        if let Some(pair) = self
            .points
            .windows(2)
            .find(|pair| pair[1].domain_value <= pair[0].domain_value)
        {
            return Err(ChartError::InvalidData(format!(
                "series `{}` domain values must be strictly increasing ({} then {})",
                self.id, pair[0].domain_value, pair[1].domain_value
            )));
        }
        Ok(())
    }
}

/// Serialized form of a series: hex color and `[domain, metric]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub color: String,
    #[serde(default)]
    pub highlighted: bool,
    pub points: Vec<(f64, f64)>,
}

impl TryFrom<SeriesSpec> for Series {
    type Error = ChartError;

    fn try_from(spec: SeriesSpec) -> ChartResult<Self> {
        let color = Color::from_hex(&spec.color)?;
        let label = if spec.label.is_empty() {
            spec.id.clone()
        } else {
            spec.label
        };
        let series = Self::from_pairs(spec.id, label, color, &spec.points)?;
        Ok(series.highlighted(spec.highlighted))
    }
}

impl From<Series> for SeriesSpec {
    fn from(series: Series) -> Self {
        Self {
            id: series.id.as_str().to_owned(),
            label: series.label,
            color: series.color.to_hex_rgb(),
            highlighted: series.highlighted,
            points: series
                .points
                .iter()
                .map(|point| (point.domain_value, point.metric_value))
                .collect(),
        }
    }
}

/// Draw order: regular series in insertion order, then highlighted ones so the
/// hero series is never occluded.
pub fn draw_order<'a, I>(series: I) -> Vec<&'a Series>
where
    I: IntoIterator<Item = &'a Series>,
{
    let (mut regular, hero): (Vec<&Series>, Vec<&Series>) =
        series.into_iter().partition(|entry| !entry.is_highlighted());
    regular.extend(hero);
    regular
}
