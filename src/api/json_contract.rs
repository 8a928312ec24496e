use serde::{Deserialize, Serialize};

use crate::core::{Series, SeriesSpec};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartConfig, ChartEngine};

pub const CHART_DOCUMENT_JSON_SCHEMA_V1: u32 = 1;

fn default_schema_version() -> u32 {
    CHART_DOCUMENT_JSON_SCHEMA_V1
}

/// A chart config plus its literal dataset, as embedded in a page.
///
/// Series stay in their serialized form until the engine is built so one bad
/// entry is dropped on its own instead of rejecting the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocument {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub config: ChartConfig,
    #[serde(default)]
    pub series: Vec<SeriesSpec>,
}

impl ChartDocument {
    #[must_use]
    pub fn new(config: ChartConfig, series: impl IntoIterator<Item = Series>) -> Self {
        Self {
            schema_version: CHART_DOCUMENT_JSON_SCHEMA_V1,
            config,
            series: series.into_iter().map(SeriesSpec::from).collect(),
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let document: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse chart document: {e}"))
        })?;
        if document.schema_version != CHART_DOCUMENT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidConfig(format!(
                "unsupported chart document schema version: {}",
                document.schema_version
            )));
        }
        document.config.validate()?;
        Ok(document)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart document: {e}"))
        })
    }

    /// Builds an engine, dropping series that fail validation.
    pub fn into_engine<R: Renderer>(self, renderer: R) -> ChartResult<ChartEngine<R>> {
        let mut engine = ChartEngine::new(renderer, self.config)?;
        engine.set_series_lenient(self.series.into_iter().map(Series::try_from).collect());
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::ChartDocument;
    use crate::render::NullRenderer;

    const DOCUMENT: &str = r##"{
        "config": {
            "viewport": { "width": 640, "height": 360 },
            "x_axis": { "domain_min": 0.0, "domain_max": 10.0 },
            "y_axis": { "domain_min": 0.0, "domain_max": 100.0 }
        },
        "series": [
            { "id": "gpt", "color": "#10a37f", "points": [[1.0, 20.0], [4.0, 55.0]] },
            { "id": "bad", "color": "#ff0000", "points": [[3.0, 1.0], [2.0, 2.0]] }
        ]
    }"##;

    #[test]
    fn invalid_series_is_dropped_not_fatal() {
        let document = ChartDocument::from_json_str(DOCUMENT).expect("document parses");
        let engine = document
            .into_engine(NullRenderer::default())
            .expect("engine builds");
        assert_eq!(engine.series_count(), 1);
    }

    #[test]
    fn unknown_schema_version_is_rejected() {
        let input = DOCUMENT.replacen('{', r#"{ "schema_version": 9,"#, 1);
        assert!(ChartDocument::from_json_str(&input).is_err());
    }
}
