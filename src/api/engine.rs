use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::{PlotMapper, PlotRect, Series, SeriesId};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartEvent, ChartPlugin};
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::label_format::{TickFormatterFn, default_tick_formatter};
use super::scene_builder::{ChartScene, SceneBuilder};
use super::ChartConfig;

/// Main orchestration facade consumed by host pages.
///
/// `ChartEngine` owns one chart instance: its axes, series, hover/pin state
/// and renderer. Every chart on a page gets its own engine; nothing is shared.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) plot: PlotRect,
    /// Insertion order is legend order and default z-order.
    pub(super) series: IndexMap<SeriesId, Series>,
    pub(super) interaction: InteractionState,
    pub(super) x_tick_formatter: TickFormatterFn,
    pub(super) y_tick_formatter: TickFormatterFn,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let plot = PlotRect::from_viewport(config.viewport, config.padding)?;
        let interaction = InteractionState::new(config.leave_debounce());

        Ok(Self {
            renderer,
            config,
            plot,
            series: IndexMap::new(),
            interaction,
            x_tick_formatter: default_tick_formatter(),
            y_tick_formatter: default_tick_formatter(),
            plugins: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn plot_rect(&self) -> PlotRect {
        self.plot
    }

    #[must_use]
    pub fn mapper(&self) -> PlotMapper<'_> {
        PlotMapper::new(&self.config.x_axis, &self.config.y_axis, self.plot)
    }

    /// Replaces all series and resets hover/pin state.
    ///
    /// Duplicate ids are rejected; the whole call fails without touching the
    /// current data.
    pub fn set_series(&mut self, series: Vec<Series>) -> ChartResult<()> {
        let mut next = IndexMap::with_capacity(series.len());
        for entry in series {
            self.warn_unplaceable_points(&entry);
            let id = entry.id().clone();
            if next.insert(id.clone(), entry).is_some() {
                return Err(ChartError::InvalidData(format!(
                    "series id `{id}` is used more than once"
                )));
            }
        }
        debug!(series_count = next.len(), "replacing chart series");
        self.series = next;
        self.interaction.on_background_click();
        self.emit_plugin_event(ChartEvent::SeriesUpdated {
            series_count: self.series.len(),
        });
        Ok(())
    }

    /// Loads series, dropping the ones that fail validation instead of
    /// failing the whole chart. Returns how many were dropped.
    pub fn set_series_lenient(&mut self, series: Vec<ChartResult<Series>>) -> usize {
        let mut kept: Vec<Series> = Vec::with_capacity(series.len());
        let mut dropped = 0;
        for entry in series {
            match entry {
                Ok(entry) if kept.iter().all(|kept| kept.id() != entry.id()) => kept.push(entry),
                Ok(entry) => {
                    warn!(series = %entry.id(), "dropping duplicate series");
                    dropped += 1;
                }
                Err(err) => {
                    warn!(error = %err, "dropping invalid series");
                    dropped += 1;
                }
            }
        }
        // Ids are unique at this point, so replacement cannot fail.
        if let Err(err) = self.set_series(kept) {
            warn!(error = %err, "series replacement failed");
        }
        dropped
    }

    /// Appends a series after the existing ones.
    pub fn add_series(&mut self, series: Series) -> ChartResult<()> {
        if self.series.contains_key(series.id()) {
            return Err(ChartError::InvalidData(format!(
                "series id `{}` is already present",
                series.id()
            )));
        }
        self.warn_unplaceable_points(&series);
        self.series.insert(series.id().clone(), series);
        self.emit_plugin_event(ChartEvent::SeriesUpdated {
            series_count: self.series.len(),
        });
        Ok(())
    }

    /// Points a log axis cannot place stay in the data but are never drawn
    /// or hit.
    fn warn_unplaceable_points(&self, series: &Series) {
        let mapper = self.mapper();
        let skipped = series
            .points()
            .iter()
            .filter(|point| !mapper.can_place(point))
            .count();
        if skipped > 0 {
            warn!(
                series = %series.id(),
                skipped,
                "points outside the log axis domain will not be drawn"
            );
        }
    }

    pub fn remove_series(&mut self, id: &SeriesId) -> ChartResult<Series> {
        let removed = self
            .series
            .shift_remove(id)
            .ok_or_else(|| ChartError::UnknownSeries(id.to_string()))?;
        let targets_removed = self
            .interaction
            .active_datum()
            .and_then(|target| target.series_id.as_ref())
            .is_some_and(|target| target == id);
        if targets_removed {
            self.background_click();
        }
        self.emit_plugin_event(ChartEvent::SeriesUpdated {
            series_count: self.series.len(),
        });
        Ok(removed)
    }

    #[must_use]
    pub fn series(&self) -> impl Iterator<Item = &Series> {
        self.series.values()
    }

    #[must_use]
    pub fn series_by_id(&self, id: &SeriesId) -> Option<&Series> {
        self.series.get(id)
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn set_x_tick_formatter(&mut self, formatter: TickFormatterFn) {
        self.x_tick_formatter = formatter;
    }

    pub fn set_y_tick_formatter(&mut self, formatter: TickFormatterFn) {
        self.y_tick_formatter = formatter;
    }

    /// Composes the current frame without rendering it.
    #[must_use]
    pub fn build_scene(&self) -> ChartScene {
        SceneBuilder::new(self).build()
    }

    pub fn render(&mut self) -> ChartResult<ChartScene> {
        let scene = self.build_scene();
        self.renderer.render(&scene.frame)?;
        self.emit_plugin_event(ChartEvent::Rendered);
        Ok(scene)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Cancels pending hover timers. Call when the hosting view unmounts.
    pub fn teardown(&mut self) {
        debug!("chart teardown");
        self.interaction.teardown();
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
