//! benchplot: headless chart engine for benchmark and model-comparison pages.
//!
//! Data goes in as typed series, a deterministic layered `RenderFrame` comes
//! out, and a `Renderer` backend (SVG, or a null backend for tests) turns it
//! into output. Hover and pin state is driven by host pointer events with
//! host-supplied timestamps, so every frame is reproducible.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine};
pub use error::{ChartError, ChartResult};
