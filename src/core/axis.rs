use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Mapping mode of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScaleKind {
    /// Uniform spacing in raw domain units.
    #[default]
    Linear,
    /// Uniform spacing in decades (all domain values must be > 0).
    Log10,
}

/// Domain interval, mapping mode and caller-chosen tick positions of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub domain_min: f64,
    pub domain_max: f64,
    #[serde(default)]
    pub scale_kind: ScaleKind,
    #[serde(default)]
    pub tick_values: Vec<f64>,
}

impl AxisSpec {
    pub fn linear(domain_min: f64, domain_max: f64) -> ChartResult<Self> {
        Self::with_kind(domain_min, domain_max, ScaleKind::Linear)
    }

    pub fn log10(domain_min: f64, domain_max: f64) -> ChartResult<Self> {
        Self::with_kind(domain_min, domain_max, ScaleKind::Log10)
    }

    pub fn with_kind(domain_min: f64, domain_max: f64, scale_kind: ScaleKind) -> ChartResult<Self> {
        let axis = Self {
            domain_min,
            domain_max,
            scale_kind,
            tick_values: Vec::new(),
        };
        axis.validate()?;
        Ok(axis)
    }

    /// Replaces tick positions. Ticks outside the domain are kept; the scene
    /// builder skips them when drawing.
    pub fn with_ticks(mut self, tick_values: impl Into<Vec<f64>>) -> ChartResult<Self> {
        self.tick_values = tick_values.into();
        self.validate()?;
        Ok(self)
    }

    /// Whether `value` has a position on this axis. Log10 axes cannot place
    /// zero or negative values.
    #[must_use]
    pub fn can_place(&self, value: f64) -> bool {
        value.is_finite() && (self.scale_kind == ScaleKind::Linear || value > 0.0)
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.domain_min && value <= self.domain_max
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.domain_min.is_finite() || !self.domain_max.is_finite() {
            return Err(ChartError::InvalidAxis(
                "axis domain bounds must be finite".to_owned(),
            ));
        }
        if self.domain_min >= self.domain_max {
            return Err(ChartError::InvalidAxis(format!(
                "axis domain min ({}) must be < max ({})",
                self.domain_min, self.domain_max
            )));
        }
        if self.scale_kind == ScaleKind::Log10 && self.domain_min <= 0.0 {
            return Err(ChartError::InvalidAxis(
                "log10 axis domain min must be > 0".to_owned(),
            ));
        }
        if let Some(tick) = self.tick_values.iter().find(|tick| !tick.is_finite()) {
            return Err(ChartError::InvalidAxis(format!(
                "axis tick `{tick}` must be finite"
            )));
        }
        if self.scale_kind == ScaleKind::Log10 && self.tick_values.iter().any(|tick| *tick <= 0.0) {
            return Err(ChartError::InvalidAxis(
                "log10 axis ticks must be > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
