//! Pieces that sit next to the chart engine rather than inside it.
//!
//! Nothing in `core` or `render` depends on these modules.

pub mod camera_flight;
pub mod plugins;
pub mod signal;

pub use camera_flight::{CameraFlight, CameraPose, FlightPhase, FlightPlan};
pub use plugins::{ChartEvent, ChartPlugin, PluginContext};
pub use signal::OnceSignal;
