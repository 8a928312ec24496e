use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::SeriesId;

/// How pointer positions resolve to interaction targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HitTestMode {
    /// Nearest marker within the hit radius (scatter charts).
    #[default]
    Points,
    /// Nearest domain column across all series (line charts over context length).
    Columns,
}

/// Something the pointer can hover or pin: one marker, or one domain column
/// when `series_id` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointTarget {
    pub series_id: Option<SeriesId>,
    pub domain_value: f64,
}

impl PointTarget {
    #[must_use]
    pub fn point(series_id: impl Into<SeriesId>, domain_value: f64) -> Self {
        Self {
            series_id: Some(series_id.into()),
            domain_value,
        }
    }

    #[must_use]
    pub fn column(domain_value: f64) -> Self {
        Self {
            series_id: None,
            domain_value,
        }
    }

    /// Whether a marker of `series_id` at `domain_value` belongs to this target.
    #[must_use]
    pub fn covers(&self, series_id: &SeriesId, domain_value: f64) -> bool {
        self.domain_value == domain_value
            && self
                .series_id
                .as_ref()
                .is_none_or(|target| target == series_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionPhase {
    Idle,
    Hovering,
    Pinned,
}

/// Hover/pin state of one chart instance.
///
/// Time is supplied by the host as the elapsed duration since mount, which
/// keeps the leave debounce deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    hovered: Option<PointTarget>,
    pinned: Option<PointTarget>,
    leave_debounce: Duration,
    pending_leave_at: Option<Duration>,
    torn_down: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(Duration::from_millis(40))
    }
}

impl InteractionState {
    #[must_use]
    pub fn new(leave_debounce: Duration) -> Self {
        Self {
            hovered: None,
            pinned: None,
            leave_debounce,
            pending_leave_at: None,
            torn_down: false,
        }
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&PointTarget> {
        self.hovered.as_ref()
    }

    #[must_use]
    pub fn pinned(&self) -> Option<&PointTarget> {
        self.pinned.as_ref()
    }

    /// Pinned target when present, otherwise the hovered one.
    #[must_use]
    pub fn active_datum(&self) -> Option<&PointTarget> {
        self.pinned.as_ref().or(self.hovered.as_ref())
    }

    #[must_use]
    pub fn phase(&self) -> InteractionPhase {
        if self.pinned.is_some() {
            InteractionPhase::Pinned
        } else if self.hovered.is_some() {
            InteractionPhase::Hovering
        } else {
            InteractionPhase::Idle
        }
    }

    #[must_use]
    pub fn leave_debounce(&self) -> Duration {
        self.leave_debounce
    }

    /// Deadline of the scheduled hover clear, if one is pending.
    #[must_use]
    pub fn pending_leave_at(&self) -> Option<Duration> {
        self.pending_leave_at
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Entering a target cancels any pending hover clear.
    pub fn on_hover_enter(&mut self, target: PointTarget) {
        if self.torn_down {
            return;
        }
        self.pending_leave_at = None;
        if self.pinned.is_some() {
            return;
        }
        self.hovered = Some(target);
    }

    /// Schedules the hover clear instead of applying it, so moving across the
    /// gap between adjacent targets does not flicker the tooltip.
    pub fn on_hover_leave(&mut self, now: Duration) {
        if self.torn_down || self.hovered.is_none() {
            return;
        }
        if self.leave_debounce.is_zero() {
            self.hovered = None;
            self.pending_leave_at = None;
            return;
        }
        self.pending_leave_at = Some(now + self.leave_debounce);
    }

    /// Fires the pending hover clear once `now` reaches its deadline.
    ///
    /// Returns `true` when hover state changed.
    pub fn advance(&mut self, now: Duration) -> bool {
        match self.pending_leave_at {
            Some(deadline) if !self.torn_down && now >= deadline => {
                self.pending_leave_at = None;
                self.hovered.take().is_some()
            }
            _ => false,
        }
    }

    /// Toggles the pin on `target`; pinning always drops transient hover.
    pub fn on_click(&mut self, target: PointTarget) {
        if self.torn_down {
            return;
        }
        self.pending_leave_at = None;
        self.hovered = None;
        if self.pinned.as_ref() == Some(&target) {
            self.pinned = None;
        } else {
            self.pinned = Some(target);
        }
    }

    pub fn on_background_click(&mut self) {
        self.hovered = None;
        self.pinned = None;
        self.pending_leave_at = None;
    }

    /// Cancels pending work; events after teardown are ignored.
    pub fn teardown(&mut self) {
        self.on_background_click();
        self.torn_down = true;
    }
}
