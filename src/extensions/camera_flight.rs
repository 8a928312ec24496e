use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::extensions::OnceSignal;

/// Globe camera placement: distance from the globe centre in globe radii and
/// the geographic point the camera looks down on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub distance: f64,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl CameraPose {
    #[must_use]
    pub const fn new(distance: f64, latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            distance,
            latitude_deg,
            longitude_deg,
        }
    }

    fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            distance: self.distance + (other.distance - self.distance) * t,
            latitude_deg: self.latitude_deg + (other.latitude_deg - self.latitude_deg) * t,
            longitude_deg: self.longitude_deg + (other.longitude_deg - self.longitude_deg) * t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightPhase {
    Waiting,
    Approach,
    Orbit,
    Settle,
    Done,
}

/// Poses and phase durations of one flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightPlan {
    pub start: CameraPose,
    pub approach: CameraPose,
    pub orbit_sweep_deg: f64,
    pub rest: CameraPose,
    pub approach_secs: f64,
    pub orbit_secs: f64,
    pub settle_secs: f64,
}

impl Default for FlightPlan {
    fn default() -> Self {
        Self {
            start: CameraPose::new(8.0, 10.0, -40.0),
            approach: CameraPose::new(3.2, -15.0, -47.0),
            orbit_sweep_deg: 60.0,
            rest: CameraPose::new(2.6, -23.5, -46.6),
            approach_secs: 2.4,
            orbit_secs: 4.0,
            settle_secs: 1.6,
        }
    }
}

impl FlightPlan {
    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("approach_secs", self.approach_secs),
            ("orbit_secs", self.orbit_secs),
            ("settle_secs", self.settle_secs),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "flight `{name}` must be finite and > 0"
                )));
            }
        }
        for pose in [self.start, self.approach, self.rest] {
            if !pose.distance.is_finite() || pose.distance <= 1.0 {
                return Err(ChartError::InvalidConfig(
                    "camera distance must be finite and outside the globe (> 1)".to_owned(),
                ));
            }
            if !pose.latitude_deg.is_finite() || !pose.longitude_deg.is_finite() {
                return Err(ChartError::InvalidConfig(
                    "camera coordinates must be finite".to_owned(),
                ));
            }
        }
        if !self.orbit_sweep_deg.is_finite() {
            return Err(ChartError::InvalidConfig(
                "orbit sweep must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    fn orbit_end(&self) -> CameraPose {
        CameraPose {
            longitude_deg: self.approach.longitude_deg + self.orbit_sweep_deg,
            ..self.approach
        }
    }
}

/// Phase sequencer for the globe camera, stepped once per animation frame.
///
/// The flight waits until [`CameraFlight::start`], usually wired to the
/// headline's completion signal through [`CameraFlight::arm`].
#[derive(Debug, Clone, PartialEq)]
pub struct CameraFlight {
    plan: FlightPlan,
    phase: FlightPhase,
    phase_elapsed: f64,
}

impl CameraFlight {
    pub fn new(plan: FlightPlan) -> ChartResult<Self> {
        plan.validate()?;
        Ok(Self {
            plan,
            phase: FlightPhase::Waiting,
            phase_elapsed: 0.0,
        })
    }

    /// Starts `flight` when `signal` fires.
    pub fn arm(flight: &Rc<RefCell<Self>>, signal: &OnceSignal) {
        let flight = Rc::clone(flight);
        signal.subscribe(move || flight.borrow_mut().start());
    }

    #[must_use]
    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == FlightPhase::Done
    }

    /// Begins the approach. Ignored unless the flight is still waiting.
    pub fn start(&mut self) {
        if self.phase == FlightPhase::Waiting {
            self.enter(FlightPhase::Approach);
        }
    }

    /// Advances the flight; leftover time carries into the following phases.
    pub fn step(&mut self, delta_seconds: f64) {
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return;
        }
        if matches!(self.phase, FlightPhase::Waiting | FlightPhase::Done) {
            return;
        }

        self.phase_elapsed += delta_seconds;
        while let Some(duration) = self.phase_duration() {
            if self.phase_elapsed < duration {
                break;
            }
            let carry = self.phase_elapsed - duration;
            let next = match self.phase {
                FlightPhase::Approach => FlightPhase::Orbit,
                FlightPhase::Orbit => FlightPhase::Settle,
                _ => FlightPhase::Done,
            };
            self.enter(next);
            self.phase_elapsed = carry;
        }
    }

    #[must_use]
    pub fn camera(&self) -> CameraPose {
        let t = self
            .phase_duration()
            .map_or(0.0, |duration| smoothstep(self.phase_elapsed / duration));
        match self.phase {
            FlightPhase::Waiting => self.plan.start,
            FlightPhase::Approach => self.plan.start.lerp(self.plan.approach, t),
            FlightPhase::Orbit => self.plan.approach.lerp(self.plan.orbit_end(), t),
            FlightPhase::Settle => self.plan.orbit_end().lerp(self.plan.rest, t),
            FlightPhase::Done => self.plan.rest,
        }
    }

    fn phase_duration(&self) -> Option<f64> {
        match self.phase {
            FlightPhase::Approach => Some(self.plan.approach_secs),
            FlightPhase::Orbit => Some(self.plan.orbit_secs),
            FlightPhase::Settle => Some(self.plan.settle_secs),
            FlightPhase::Waiting | FlightPhase::Done => None,
        }
    }

    fn enter(&mut self, phase: FlightPhase) {
        debug!(from = ?self.phase, to = ?phase, "camera flight phase change");
        self.phase = phase;
        self.phase_elapsed = 0.0;
    }
}

fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use approx::assert_relative_eq;

    use super::{CameraFlight, FlightPhase, FlightPlan};
    use crate::extensions::OnceSignal;

    #[test]
    fn waits_until_started() {
        let mut flight = CameraFlight::new(FlightPlan::default()).expect("valid plan");
        flight.step(10.0);
        assert_eq!(flight.phase(), FlightPhase::Waiting);
        assert_eq!(flight.camera(), FlightPlan::default().start);
    }

    #[test]
    fn walks_through_every_phase() {
        let plan = FlightPlan::default();
        let mut flight = CameraFlight::new(plan).expect("valid plan");
        flight.start();
        assert_eq!(flight.phase(), FlightPhase::Approach);
        flight.step(plan.approach_secs / 2.0);
        let mid = flight.camera();
        assert_relative_eq!(
            mid.distance,
            (plan.start.distance + plan.approach.distance) / 2.0,
            epsilon = 1e-9
        );
        flight.step(plan.approach_secs / 2.0);
        assert_eq!(flight.phase(), FlightPhase::Orbit);
        flight.step(plan.orbit_secs);
        assert_eq!(flight.phase(), FlightPhase::Settle);
        flight.step(plan.settle_secs + 1.0);
        assert!(flight.is_done());
        assert_eq!(flight.camera(), plan.rest);
    }

    #[test]
    fn large_step_carries_across_phases() {
        let plan = FlightPlan::default();
        let mut flight = CameraFlight::new(plan).expect("valid plan");
        flight.start();
        flight.step(plan.approach_secs + plan.orbit_secs + 0.1);
        assert_eq!(flight.phase(), FlightPhase::Settle);
    }

    #[test]
    fn signal_starts_armed_flight() {
        let signal = OnceSignal::new("typewriter-complete");
        let flight = Rc::new(RefCell::new(
            CameraFlight::new(FlightPlan::default()).expect("valid plan"),
        ));
        CameraFlight::arm(&flight, &signal);
        assert_eq!(flight.borrow().phase(), FlightPhase::Waiting);
        signal.fire();
        assert_eq!(flight.borrow().phase(), FlightPhase::Approach);
    }

    #[test]
    fn camera_inside_globe_is_rejected() {
        let mut plan = FlightPlan::default();
        plan.rest.distance = 0.5;
        assert!(CameraFlight::new(plan).is_err());
    }
}
