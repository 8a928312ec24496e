mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::{LayerPrimitives, RenderFrame};
pub use layer_stack::CanvasLayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, PathPrimitive, RectPrimitive,
    TextHAlign, TextPrimitive,
};
pub use svg_backend::{SvgRenderStats, SvgRenderer};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from chart data and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
