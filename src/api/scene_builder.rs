use indexmap::IndexMap;

use crate::core::{
    AxisSpec, PlotMapper, PlotRect, Series, SeriesId, TooltipBox, TooltipLayout, build_series_path,
    draw_order, tooltip,
};
use crate::interaction::InteractionState;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, LineStrokeStyle, PathPrimitive,
    RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::label_format::TickFormatterFn;
use super::{ActiveDatum, ChartConfig, ChartEngine, ChartStyle, MessageKey};

const TOOLTIP_PADDING_PX: f64 = 8.0;
const TOOLTIP_LINE_HEIGHT: f64 = 1.4;
const TICK_LABEL_GAP_PX: f64 = 4.0;

/// Everything one frame needs: the primitives plus the tooltip geometry, so a
/// host can anchor its own overlay element at the same SVG coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub frame: RenderFrame,
    pub tooltip: Option<TooltipBox>,
    pub active: Option<ActiveDatum>,
}

/// Tooltip layout grown to fit a header line plus one line per entry.
pub(super) fn tooltip_layout(
    base: TooltipLayout,
    style: &ChartStyle,
    entry_count: usize,
) -> TooltipLayout {
    let lines = (entry_count + 1) as f64;
    let needed =
        TOOLTIP_PADDING_PX * 2.0 + lines * style.tooltip_font_size_px * TOOLTIP_LINE_HEIGHT;
    TooltipLayout {
        height: base.height.max(needed),
        ..base
    }
}

/// Ticks outside the domain are skipped rather than clamped to the edge.
fn visible_ticks(axis: &AxisSpec) -> impl Iterator<Item = f64> + '_ {
    axis.tick_values
        .iter()
        .copied()
        .filter(|tick| axis.contains(*tick))
}

pub(super) struct SceneBuilder<'a> {
    config: &'a ChartConfig,
    plot: PlotRect,
    series: &'a IndexMap<SeriesId, Series>,
    interaction: &'a InteractionState,
    x_tick_formatter: &'a TickFormatterFn,
    y_tick_formatter: &'a TickFormatterFn,
}

impl<'a> SceneBuilder<'a> {
    pub(super) fn new<R: Renderer>(engine: &'a ChartEngine<R>) -> Self {
        Self {
            config: &engine.config,
            plot: engine.plot,
            series: &engine.series,
            interaction: &engine.interaction,
            x_tick_formatter: &engine.x_tick_formatter,
            y_tick_formatter: &engine.y_tick_formatter,
        }
    }

    pub(super) fn build(&self) -> ChartScene {
        let mapper = PlotMapper::new(&self.config.x_axis, &self.config.y_axis, self.plot);
        let ordered = draw_order(self.series.values());
        let active = self
            .interaction
            .active_datum()
            .and_then(|target| ActiveDatum::resolve(target, ordered.iter().copied(), &mapper));

        let mut frame = RenderFrame::new(self.config.viewport);
        self.push_background(&mut frame);
        if self.config.show_grid {
            self.push_grid(&mut frame, &mapper);
        }
        self.push_axes(&mut frame, &mapper);

        if self.series.is_empty() {
            self.push_no_data(&mut frame);
        }
        self.push_series_paths(&mut frame, &ordered, &mapper, active.as_ref());
        self.push_markers(&mut frame, &ordered, &mapper, active.as_ref());

        let tooltip = active.as_ref().and_then(|datum| {
            let layout =
                tooltip_layout(self.config.tooltip, &self.config.style, datum.entries.len());
            let tooltip_box = tooltip::position(Some(datum.anchor), self.plot, layout)?;
            self.push_tooltip(&mut frame, datum, tooltip_box);
            Some(tooltip_box)
        });

        ChartScene {
            frame,
            tooltip,
            active,
        }
    }

    fn style(&self) -> &ChartStyle {
        &self.config.style
    }

    fn push_background(&self, frame: &mut RenderFrame) {
        if let Some(color) = self.style().background_color {
            frame.push_rect(
                CanvasLayerKind::Background,
                RectPrimitive::new(
                    0.0,
                    0.0,
                    f64::from(self.config.viewport.width),
                    f64::from(self.config.viewport.height),
                    color,
                ),
            );
        }
    }

    fn push_grid(&self, frame: &mut RenderFrame, mapper: &PlotMapper<'_>) {
        let style = self.style();
        let plot = self.plot;
        let x_axis = &self.config.x_axis;
        for tick in visible_ticks(x_axis) {
            let x = mapper.x_to_pixel(tick);
            frame.push_line(
                CanvasLayerKind::Grid,
                LinePrimitive::new(
                    x,
                    plot.top,
                    x,
                    plot.bottom,
                    style.grid_line_width_px,
                    style.grid_line_color,
                )
                .with_stroke_style(LineStrokeStyle::Dashed),
            );
        }
        let y_axis = &self.config.y_axis;
        for tick in visible_ticks(y_axis) {
            let y = mapper.y_to_pixel(tick);
            frame.push_line(
                CanvasLayerKind::Grid,
                LinePrimitive::new(
                    plot.left,
                    y,
                    plot.right,
                    y,
                    style.grid_line_width_px,
                    style.grid_line_color,
                )
                .with_stroke_style(LineStrokeStyle::Dashed),
            );
        }
    }

    fn push_axes(&self, frame: &mut RenderFrame, mapper: &PlotMapper<'_>) {
        let style = self.style();
        let plot = self.plot;
        let axis = CanvasLayerKind::Axis;

        frame.push_line(
            axis,
            LinePrimitive::new(
                plot.left,
                plot.top,
                plot.left,
                plot.bottom,
                style.axis_line_width_px,
                style.axis_line_color,
            ),
        );
        frame.push_line(
            axis,
            LinePrimitive::new(
                plot.left,
                plot.bottom,
                plot.right,
                plot.bottom,
                style.axis_line_width_px,
                style.axis_line_color,
            ),
        );

        let x_axis = &self.config.x_axis;
        let label_y =
            plot.bottom + style.tick_length_px + TICK_LABEL_GAP_PX + style.tick_font_size_px;
        for tick in visible_ticks(x_axis) {
            let x = mapper.x_to_pixel(tick);
            if style.tick_length_px > 0.0 {
                frame.push_line(
                    axis,
                    LinePrimitive::new(
                        x,
                        plot.bottom,
                        x,
                        plot.bottom + style.tick_length_px,
                        style.axis_line_width_px,
                        style.axis_line_color,
                    ),
                );
            }
            let label = (self.x_tick_formatter)(tick);
            if !label.is_empty() {
                frame.push_text(
                    axis,
                    TextPrimitive::new(
                        label,
                        x,
                        label_y,
                        style.tick_font_size_px,
                        style.tick_label_color,
                        TextHAlign::Center,
                    ),
                );
            }
        }

        let y_axis = &self.config.y_axis;
        let label_x = plot.left - style.tick_length_px - TICK_LABEL_GAP_PX;
        for tick in visible_ticks(y_axis) {
            let y = mapper.y_to_pixel(tick);
            if style.tick_length_px > 0.0 {
                frame.push_line(
                    axis,
                    LinePrimitive::new(
                        plot.left - style.tick_length_px,
                        y,
                        plot.left,
                        y,
                        style.axis_line_width_px,
                        style.axis_line_color,
                    ),
                );
            }
            let label = (self.y_tick_formatter)(tick);
            if !label.is_empty() {
                frame.push_text(
                    axis,
                    TextPrimitive::new(
                        label,
                        label_x,
                        y + style.tick_font_size_px * 0.35,
                        style.tick_font_size_px,
                        style.tick_label_color,
                        TextHAlign::Right,
                    ),
                );
            }
        }
    }

    fn push_no_data(&self, frame: &mut RenderFrame) {
        let style = self.style();
        frame.push_text(
            CanvasLayerKind::Series,
            TextPrimitive::new(
                self.config.locale.text(MessageKey::NoData),
                (self.plot.left + self.plot.right) / 2.0,
                (self.plot.top + self.plot.bottom) / 2.0,
                style.tick_font_size_px,
                style.tick_label_color,
                TextHAlign::Center,
            ),
        );
    }

    fn push_series_paths(
        &self,
        frame: &mut RenderFrame,
        ordered: &[&Series],
        mapper: &PlotMapper<'_>,
        active: Option<&ActiveDatum>,
    ) {
        let style = self.style();
        let focused_series = active.and_then(|datum| datum.target.series_id.as_ref());
        for series in ordered {
            let path = build_series_path(series, mapper);
            if path.is_empty() {
                continue;
            }
            let opacity = match focused_series {
                Some(id) if id != series.id() => style.dimmed_series_opacity,
                _ => 1.0,
            };
            let stroke_width = if series.is_highlighted() {
                style.hero_line_width_px
            } else {
                style.series_line_width_px
            };
            frame.push_path(
                CanvasLayerKind::Series,
                PathPrimitive {
                    path,
                    stroke_width,
                    color: series.color(),
                    opacity,
                },
            );
        }
    }

    /// Spotlight: while anything is active every other marker is dimmed, and
    /// active markers are painted after the rest.
    fn push_markers(
        &self,
        frame: &mut RenderFrame,
        ordered: &[&Series],
        mapper: &PlotMapper<'_>,
        active: Option<&ActiveDatum>,
    ) {
        let marker = self.style().marker;
        let mut spotlit = Vec::new();
        for series in ordered {
            for point in series.points() {
                let Some(pixel) = mapper.try_map(point) else {
                    continue;
                };
                let is_active = active
                    .is_some_and(|datum| datum.target.covers(series.id(), point.domain_value));
                let circle = CirclePrimitive {
                    cx: pixel.x,
                    cy: pixel.y,
                    radius: if is_active {
                        marker.active_radius_px
                    } else {
                        marker.radius_px
                    },
                    fill_color: series.color(),
                    stroke_color: marker.stroke_color,
                    stroke_width: if is_active {
                        marker.active_stroke_width_px
                    } else {
                        marker.stroke_width_px
                    },
                    opacity: if active.is_some() && !is_active {
                        marker.dimmed_opacity
                    } else {
                        1.0
                    },
                };
                if is_active {
                    spotlit.push(circle);
                } else {
                    frame.push_circle(CanvasLayerKind::Markers, circle);
                }
            }
        }
        for circle in spotlit {
            frame.push_circle(CanvasLayerKind::Markers, circle);
        }
    }

    fn push_tooltip(&self, frame: &mut RenderFrame, datum: &ActiveDatum, tooltip_box: TooltipBox) {
        let style = self.style();
        let layer = CanvasLayerKind::Tooltip;
        frame.push_rect(
            layer,
            RectPrimitive::new(
                tooltip_box.box_x,
                tooltip_box.box_y,
                tooltip_box.width,
                tooltip_box.height,
                style.tooltip_fill_color,
            )
            .with_border(1.0, style.tooltip_border_color)
            .with_corner_radius(style.tooltip_corner_radius_px),
        );

        let is_column = datum.target.series_id.is_none();
        let header = match datum.entries.first() {
            Some(entry) if !is_column => entry.label.clone(),
            _ => (self.x_tick_formatter)(datum.target.domain_value),
        };
        let lines = datum.entries.iter().map(|entry| {
            let metric = (self.y_tick_formatter)(entry.metric_value);
            if is_column {
                format!("{}: {metric}", entry.label)
            } else {
                format!("{} · {metric}", (self.x_tick_formatter)(entry.domain_value))
            }
        });

        let line_height = style.tooltip_font_size_px * TOOLTIP_LINE_HEIGHT;
        let x = tooltip_box.box_x + TOOLTIP_PADDING_PX;
        let mut y = tooltip_box.box_y + TOOLTIP_PADDING_PX + style.tooltip_font_size_px;
        for text in std::iter::once(header).chain(lines) {
            if !text.is_empty() {
                frame.push_text(
                    layer,
                    TextPrimitive::new(
                        text,
                        x,
                        y,
                        style.tooltip_font_size_px,
                        style.tooltip_text_color,
                        TextHAlign::Left,
                    ),
                );
            }
            y += line_height;
        }
    }
}
