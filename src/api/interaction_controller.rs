use std::time::Duration;

use tracing::{debug, trace};

use crate::core::{TooltipBox, TooltipLayout, draw_order, tooltip};
use crate::extensions::ChartEvent;
use crate::interaction::{InteractionPhase, InteractionState, PointTarget};
use crate::render::Renderer;

use super::scene_builder::tooltip_layout;
use super::{ActiveDatum, ChartEngine};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn interaction_phase(&self) -> InteractionPhase {
        self.interaction.phase()
    }

    #[must_use]
    pub fn interaction_state(&self) -> &InteractionState {
        &self.interaction
    }

    /// Pinned target when present, otherwise the hovered one.
    #[must_use]
    pub fn active_target(&self) -> Option<&PointTarget> {
        self.interaction.active_datum()
    }

    /// Active target resolved against the current series.
    #[must_use]
    pub fn active_datum(&self) -> Option<ActiveDatum> {
        let target = self.interaction.active_datum()?;
        ActiveDatum::resolve(target, draw_order(self.series.values()), &self.mapper())
    }

    /// Tooltip geometry for the current frame, in plot pixel space.
    #[must_use]
    pub fn tooltip_box(&self) -> Option<TooltipBox> {
        let datum = self.active_datum()?;
        tooltip::position(
            Some(datum.anchor),
            self.plot,
            self.tooltip_layout_for(datum.entries.len()),
        )
    }

    /// Handles pointer movement in plot pixel space; `now` is the time since
    /// the chart was mounted.
    pub fn pointer_move(&mut self, x: f64, y: f64, now: Duration) {
        self.advance(now);
        match self.hit_test(x, y) {
            Some(target) => {
                trace!(?target, "pointer over target");
                self.apply_interaction(|state| state.on_hover_enter(target));
            }
            None => self.schedule_hover_leave(now),
        }
    }

    /// Marks the pointer as outside the chart.
    pub fn pointer_leave(&mut self, now: Duration) {
        self.advance(now);
        self.schedule_hover_leave(now);
    }

    /// Click at a pointer position: toggles the pin on a target, or clears
    /// everything when the click lands on the background.
    pub fn pointer_click(&mut self, x: f64, y: f64, now: Duration) {
        self.advance(now);
        match self.hit_test(x, y) {
            Some(target) => self.click_target(target),
            None => self.background_click(),
        }
    }

    /// Hover entry for hosts that run their own hit regions.
    pub fn hover_target(&mut self, target: PointTarget, now: Duration) {
        self.advance(now);
        self.apply_interaction(|state| state.on_hover_enter(target));
    }

    pub fn click_target(&mut self, target: PointTarget) {
        self.apply_interaction(|state| state.on_click(target));
    }

    pub fn background_click(&mut self) {
        let had_state = self.interaction.phase() != InteractionPhase::Idle;
        self.interaction.on_background_click();
        if had_state {
            debug!("interaction cleared by background click");
            self.emit_plugin_event(ChartEvent::Cleared);
        }
    }

    /// Fires the hover-leave debounce once `now` passes its deadline.
    /// Hosts call this from their animation-frame or timer callback.
    pub fn advance(&mut self, now: Duration) {
        if self.interaction.advance(now) {
            trace!(?now, "hover debounce expired");
            self.emit_plugin_event(ChartEvent::HoverCleared);
        }
    }

    pub(super) fn tooltip_layout_for(&self, entry_count: usize) -> TooltipLayout {
        tooltip_layout(self.config.tooltip, &self.config.style, entry_count)
    }

    fn schedule_hover_leave(&mut self, now: Duration) {
        // Keep the first deadline; continuous movement over empty space must
        // not postpone the clear forever.
        if self.interaction.hovered().is_some() && self.interaction.pending_leave_at().is_none() {
            self.interaction.on_hover_leave(now);
            if self.interaction.hovered().is_none() {
                self.emit_plugin_event(ChartEvent::HoverCleared);
            }
        }
    }

    fn apply_interaction(&mut self, update: impl FnOnce(&mut InteractionState)) {
        let hovered_before = self.interaction.hovered().cloned();
        let pinned_before = self.interaction.pinned().cloned();
        update(&mut self.interaction);

        let pinned_after = self.interaction.pinned().cloned();
        if pinned_before != pinned_after {
            match pinned_after {
                Some(target) => {
                    debug!(?target, "pinned");
                    self.emit_plugin_event(ChartEvent::Pinned { target });
                }
                None => {
                    debug!("unpinned");
                    self.emit_plugin_event(ChartEvent::Unpinned);
                }
            }
        }

        let hovered_after = self.interaction.hovered().cloned();
        if hovered_before != hovered_after {
            match hovered_after {
                Some(target) => self.emit_plugin_event(ChartEvent::Hovered { target }),
                None => self.emit_plugin_event(ChartEvent::HoverCleared),
            }
        }
    }
}
