use std::time::Duration;

use benchplot::api::{ChartConfig, ChartEngine};
use benchplot::core::{AxisSpec, PlotPadding, Series, Viewport};
use benchplot::interaction::PointTarget;
use benchplot::render::{Color, SvgRenderer};

fn svg_engine() -> ChartEngine<SvgRenderer> {
    let config = ChartConfig::new(
        Viewport::new(100, 100),
        AxisSpec::linear(1.0, 3.0).expect("valid x axis"),
        AxisSpec::linear(0.0, 20.0).expect("valid y axis"),
    )
    .with_padding(PlotPadding::uniform(0.0));
    let mut engine = ChartEngine::new(SvgRenderer::new(), config).expect("engine init");
    engine
        .set_series(vec![
            Series::from_pairs(
                "alpha",
                "Alpha <base>",
                Color::rgb(1.0, 0.0, 0.0),
                &[(1.0, 10.0), (2.0, 20.0), (3.0, 15.0)],
            )
            .expect("valid series"),
        ])
        .expect("set series");
    engine
}

#[test]
fn svg_document_contains_every_layer_in_order() {
    let mut engine = svg_engine();
    engine.render().expect("render");
    let svg = engine.renderer().last_svg();

    assert!(svg.starts_with(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"100\""
    ));
    assert!(svg.trim_end().ends_with("</svg>"));
    let axis = svg.find("<g id=\"axis\">").expect("axis group");
    let series = svg.find("<g id=\"series\">").expect("series group");
    let markers = svg.find("<g id=\"markers\">").expect("markers group");
    assert!(axis < series && series < markers);
    assert!(!svg.contains("<g id=\"tooltip\">"), "empty layers are skipped");
}

#[test]
fn svg_path_and_markers_use_mapped_coordinates() {
    let mut engine = svg_engine();
    engine.render().expect("render");
    let svg = engine.renderer().last_svg();

    assert!(svg.contains("<path d=\"M0.00,50.00 C"));
    assert!(svg.contains("stroke=\"#ff0000\""));
    assert!(svg.contains("<circle cx=\"50\" cy=\"0\" r=\"4\""));
    assert_eq!(engine.renderer().last_stats().paths_drawn, 1);
    assert_eq!(engine.renderer().last_stats().circles_drawn, 3);
}

#[test]
fn tooltip_text_is_escaped() {
    let mut engine = svg_engine();
    engine.hover_target(PointTarget::point("alpha", 2.0), Duration::ZERO);
    engine.render().expect("render");
    let svg = engine.renderer().last_svg();

    assert!(svg.contains("<g id=\"tooltip\">"));
    assert!(svg.contains(">Alpha &lt;base&gt;</text>"));
    assert!(svg.contains(">2 · 20</text>"));
}

#[test]
fn identical_state_renders_identical_bytes() {
    let mut first = svg_engine();
    let mut second = svg_engine();
    first.render().expect("render");
    second.render().expect("render");
    assert_eq!(first.renderer().last_svg(), second.renderer().last_svg());
}

#[test]
fn font_family_must_not_be_empty() {
    let mut renderer = SvgRenderer::new();
    assert!(renderer.set_font_family("").is_err());
    renderer
        .set_font_family("JetBrains Mono")
        .expect("valid font family");
    assert_eq!(renderer.backend_name(), "svg");
}
