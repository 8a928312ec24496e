pub mod axis;
pub mod path;
pub mod scale;
pub mod series;
pub mod tooltip;
pub mod types;

pub use axis::{AxisSpec, ScaleKind};
pub use path::{CubicSegment, PathDescription, build_path, build_series_path};
pub use scale::{PlotMapper, to_domain, to_pixel};
pub use series::{Series, SeriesSpec, draw_order};
pub use tooltip::{TooltipBox, TooltipLayout};
pub use types::{DataPoint, PixelPoint, PixelRange, PlotPadding, PlotRect, SeriesId, Viewport};
