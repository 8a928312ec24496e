use benchplot::api::{ChartConfig, ChartDocument, Locale};
use benchplot::core::{AxisSpec, ScaleKind, Series, Viewport};
use benchplot::interaction::HitTestMode;
use benchplot::render::{Color, SvgRenderer};

#[test]
fn minimal_config_fills_defaults() {
    let config = ChartConfig::from_json_str(
        r#"{
            "viewport": { "width": 720, "height": 400 },
            "x_axis": { "domain_min": 1e8, "domain_max": 1e12, "scale_kind": "Log10" },
            "y_axis": { "domain_min": 0.0, "domain_max": 100.0 }
        }"#,
    )
    .expect("config parses");

    assert_eq!(config.x_axis.scale_kind, ScaleKind::Log10);
    assert_eq!(config.leave_debounce_ms, 40);
    assert_eq!(config.hit_test_mode, HitTestMode::Points);
    assert!(config.show_grid);
    assert_eq!(config.locale, Locale::En);
}

#[test]
fn invalid_axis_in_json_is_rejected() {
    let result = ChartConfig::from_json_str(
        r#"{
            "viewport": { "width": 720, "height": 400 },
            "x_axis": { "domain_min": 0.0, "domain_max": 10.0, "scale_kind": "Log10" },
            "y_axis": { "domain_min": 0.0, "domain_max": 100.0 }
        }"#,
    );
    assert!(result.is_err());
}

#[test]
fn config_round_trips_through_json() {
    let config = ChartConfig::new(
        Viewport::new(640, 360),
        AxisSpec::log10(4_096.0, 1_048_576.0)
            .expect("valid x axis")
            .with_ticks(vec![4_096.0, 32_768.0, 262_144.0])
            .expect("valid ticks"),
        AxisSpec::linear(0.0, 1.0).expect("valid y axis"),
    )
    .with_hit_test_mode(HitTestMode::Columns)
    .with_leave_debounce_ms(80)
    .with_locale(Locale::Pt);

    let json = config.to_json_pretty().expect("serialize");
    let restored = ChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn document_builds_a_rendering_engine() {
    let config = ChartConfig::new(
        Viewport::new(640, 360),
        AxisSpec::linear(0.0, 10.0).expect("valid x axis"),
        AxisSpec::linear(0.0, 100.0).expect("valid y axis"),
    );
    let series = Series::from_pairs(
        "claude",
        "Claude",
        Color::from_hex("#d97757").expect("valid hex"),
        &[(1.0, 40.0), (5.0, 70.0), (9.0, 88.0)],
    )
    .expect("valid series")
    .highlighted(true);

    let json = ChartDocument::new(config, vec![series.clone()])
        .to_json_pretty()
        .expect("serialize");
    let document = ChartDocument::from_json_str(&json).expect("parse");
    let mut engine = document.into_engine(SvgRenderer::new()).expect("engine");

    assert_eq!(engine.series().next(), Some(&series));
    engine.render().expect("render");
    assert!(engine.renderer().last_svg().contains("#d97757"));
}
