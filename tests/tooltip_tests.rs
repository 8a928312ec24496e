use std::time::Duration;

use approx::assert_relative_eq;
use benchplot::api::{ChartConfig, ChartEngine};
use benchplot::core::tooltip::position;
use benchplot::core::{AxisSpec, PixelPoint, PlotPadding, PlotRect, Series, TooltipLayout, Viewport};
use benchplot::interaction::PointTarget;
use benchplot::render::{Color, NullRenderer};

fn wide_plot() -> PlotRect {
    PlotRect::new(40.0, 20.0, 440.0, 320.0)
}

#[test]
fn no_anchor_means_no_tooltip() {
    assert!(position(None, wide_plot(), TooltipLayout::default()).is_none());
}

#[test]
fn tooltip_is_centred_above_the_anchor() {
    let layout = TooltipLayout::default();
    let tooltip = position(Some(PixelPoint::new(240.0, 200.0)), wide_plot(), layout)
        .expect("tooltip");

    assert_relative_eq!(tooltip.box_x, 240.0 - layout.width / 2.0);
    assert_relative_eq!(tooltip.box_y, 200.0 - layout.gap - layout.height);
    assert_relative_eq!(tooltip.anchor_x, 240.0);
}

#[test]
fn left_edge_clamp_lands_on_plot_left() {
    let tooltip = position(
        Some(PixelPoint::new(45.0, 200.0)),
        wide_plot(),
        TooltipLayout::default(),
    )
    .expect("tooltip");
    assert_relative_eq!(tooltip.box_x, 40.0);
}

#[test]
fn right_edge_clamp_keeps_box_inside() {
    let layout = TooltipLayout::default();
    let tooltip = position(Some(PixelPoint::new(438.0, 200.0)), wide_plot(), layout)
        .expect("tooltip");
    assert_relative_eq!(tooltip.box_x + tooltip.width, 440.0);
}

#[test]
fn box_wider_than_plot_pins_to_left_edge() {
    let narrow = PlotRect::new(10.0, 0.0, 90.0, 100.0);
    let anchor = PixelPoint::new(50.0, 60.0);
    let tooltip = position(Some(anchor), narrow, TooltipLayout::default()).expect("tooltip");
    assert_relative_eq!(tooltip.box_x, 10.0);
}

#[test]
fn anchor_near_top_is_not_clamped_vertically() {
    let tooltip = position(
        Some(PixelPoint::new(240.0, 25.0)),
        wide_plot(),
        TooltipLayout::default(),
    )
    .expect("tooltip");
    assert!(tooltip.box_y < wide_plot().top);
}

#[test]
fn engine_tooltip_grows_with_column_entries() {
    let config = ChartConfig::new(
        Viewport::new(480, 320),
        AxisSpec::linear(0.0, 10.0).expect("valid x axis"),
        AxisSpec::linear(0.0, 100.0).expect("valid y axis"),
    )
    .with_padding(PlotPadding::uniform(20.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    let grey = Color::rgb(0.5, 0.5, 0.5);
    engine
        .set_series(
            (0..4)
                .map(|index| {
                    Series::from_pairs(
                        format!("s{index}"),
                        format!("Series {index}"),
                        grey,
                        &[(5.0, 10.0 * f64::from(index + 1))],
                    )
                    .expect("valid series")
                })
                .collect(),
        )
        .expect("set series");

    engine.hover_target(PointTarget::point("s0", 5.0), Duration::ZERO);
    let single = engine.tooltip_box().expect("point tooltip");

    engine.hover_target(PointTarget::column(5.0), Duration::ZERO);
    let column = engine.tooltip_box().expect("column tooltip");

    assert!(column.height > single.height);
    assert_relative_eq!(column.anchor_x, 240.0);
}
