use serde::{Deserialize, Serialize};

use crate::core::{PlotRect, Viewport};
use crate::interaction::{InteractionPhase, PointTarget};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub plot: PlotRect,
    pub series_count: usize,
    pub phase: InteractionPhase,
    pub active: Option<PointTarget>,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    SeriesUpdated { series_count: usize },
    Hovered { target: PointTarget },
    HoverCleared,
    Pinned { target: PointTarget },
    Unpinned,
    Cleared,
    Rendered,
}

/// Extension hook interface for bounded custom logic, such as analytics or a
/// host overlay that mirrors the tooltip.
///
/// Plugins observe events and read engine context without mutating chart
/// internals.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &ChartEvent, context: &PluginContext);
}
