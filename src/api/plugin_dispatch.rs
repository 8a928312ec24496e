use tracing::trace;

use crate::extensions::{ChartEvent, PluginContext};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.config.viewport,
            plot: self.plot,
            series_count: self.series.len(),
            phase: self.interaction.phase(),
            active: self.interaction.active_datum().cloned(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: ChartEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        trace!(?event, plugins = self.plugins.len(), "dispatching chart event");
        for plugin in &mut self.plugins {
            plugin.on_event(&event, &context);
        }
    }
}
