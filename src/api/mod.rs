//! Engine facade and everything a host page talks to.

mod active_datum;
mod boundary;
mod engine;
mod engine_config;
mod interaction_controller;
mod json_contract;
mod label_format;
mod locale;
mod plugin_dispatch;
mod plugin_registry;
mod render_style;
mod scene_builder;
mod validation;

pub use active_datum::{ActiveDatum, TooltipEntry};
pub use boundary::{BoundaryView, ErrorBoundary, FallbackView};
pub use engine::ChartEngine;
pub use engine_config::ChartConfig;
pub use json_contract::{CHART_DOCUMENT_JSON_SCHEMA_V1, ChartDocument};
pub use label_format::{
    TickFormatterFn, default_tick_formatter, magnitude_label, percent_label, plain_label,
    token_count_label,
};
pub use locale::{Locale, MessageKey};
pub use render_style::{ChartStyle, MarkerStyle};
pub use scene_builder::ChartScene;
