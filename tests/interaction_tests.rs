use std::time::Duration;

use benchplot::api::{ChartConfig, ChartEngine};
use benchplot::core::{AxisSpec, PlotPadding, Series, SeriesId, Viewport};
use benchplot::interaction::{HitTestMode, InteractionPhase, PointTarget};
use benchplot::render::{Color, NullRenderer};

const ALPHA: Color = Color::rgb(0.2, 0.4, 0.9);
const BETA: Color = Color::rgb(0.9, 0.4, 0.2);

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

// 100x100 plot without padding: x [1, 3] and y [0, 20].
// alpha sits at (0,50) (50,0) (100,25); beta at (0,75) (50,60) (100,40).
fn config() -> ChartConfig {
    ChartConfig::new(
        Viewport::new(100, 100),
        AxisSpec::linear(1.0, 3.0).expect("valid x axis"),
        AxisSpec::linear(0.0, 20.0).expect("valid y axis"),
    )
    .with_padding(PlotPadding::uniform(0.0))
}

fn engine_with(config: ChartConfig) -> ChartEngine<NullRenderer> {
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_series(vec![
            Series::from_pairs(
                "alpha",
                "Alpha",
                ALPHA,
                &[(1.0, 10.0), (2.0, 20.0), (3.0, 15.0)],
            )
            .expect("valid alpha"),
            Series::from_pairs("beta", "Beta", BETA, &[(1.0, 5.0), (2.0, 8.0), (3.0, 12.0)])
                .expect("valid beta"),
        ])
        .expect("set series");
    engine
}

fn engine() -> ChartEngine<NullRenderer> {
    engine_with(config())
}

#[test]
fn hovering_a_marker_makes_it_active() {
    let mut engine = engine();
    engine.pointer_move(3.0, 48.0, ms(0));

    assert_eq!(engine.interaction_phase(), InteractionPhase::Hovering);
    assert_eq!(
        engine.active_target(),
        Some(&PointTarget::point("alpha", 1.0))
    );
    let datum = engine.active_datum().expect("resolved datum");
    assert_eq!(datum.entries.len(), 1);
    assert_eq!(datum.entries[0].metric_value, 10.0);
}

#[test]
fn clicking_the_same_marker_twice_clears_the_pin() {
    let mut engine = engine();
    engine.pointer_click(50.0, 1.0, ms(0));
    assert_eq!(engine.interaction_phase(), InteractionPhase::Pinned);

    engine.pointer_click(50.0, 1.0, ms(100));
    assert_eq!(engine.interaction_phase(), InteractionPhase::Idle);
    assert!(engine.active_datum().is_none());
}

#[test]
fn pinned_target_wins_over_hover() {
    let mut engine = engine();
    engine.pointer_click(50.0, 60.0, ms(0));
    engine.pointer_move(0.0, 50.0, ms(20));

    assert_eq!(engine.active_target(), Some(&PointTarget::point("beta", 2.0)));
    assert_eq!(engine.interaction_phase(), InteractionPhase::Pinned);
}

#[test]
fn clicking_another_marker_moves_the_pin() {
    let mut engine = engine();
    engine.click_target(PointTarget::point("alpha", 2.0));
    engine.click_target(PointTarget::point("beta", 3.0));

    assert_eq!(engine.active_target(), Some(&PointTarget::point("beta", 3.0)));
}

#[test]
fn background_click_clears_everything() {
    let mut engine = engine();
    engine.pointer_click(100.0, 25.0, ms(0));
    assert_eq!(engine.interaction_phase(), InteractionPhase::Pinned);

    engine.pointer_click(50.0, 30.0, ms(10));
    assert_eq!(engine.interaction_phase(), InteractionPhase::Idle);
    assert!(engine.active_target().is_none());
}

#[test]
fn hover_leave_is_debounced() {
    let mut engine = engine();
    engine.pointer_move(0.0, 50.0, ms(0));
    engine.pointer_leave(ms(10));

    engine.advance(ms(49));
    assert_eq!(engine.interaction_phase(), InteractionPhase::Hovering);

    engine.advance(ms(50));
    assert_eq!(engine.interaction_phase(), InteractionPhase::Idle);
}

#[test]
fn reentering_before_the_deadline_cancels_the_clear() {
    let mut engine = engine();
    engine.pointer_move(0.0, 50.0, ms(0));
    engine.pointer_leave(ms(10));
    engine.pointer_move(100.0, 26.0, ms(30));

    engine.advance(ms(500));
    assert_eq!(
        engine.active_target(),
        Some(&PointTarget::point("alpha", 3.0))
    );
}

#[test]
fn moving_over_empty_space_does_not_postpone_the_clear() {
    let mut engine = engine();
    engine.pointer_move(0.0, 50.0, ms(0));
    engine.pointer_move(30.0, 30.0, ms(5));
    engine.pointer_move(32.0, 30.0, ms(25));
    engine.pointer_move(34.0, 30.0, ms(44));

    assert_eq!(engine.interaction_phase(), InteractionPhase::Hovering);
    engine.pointer_move(36.0, 30.0, ms(45));
    assert_eq!(engine.interaction_phase(), InteractionPhase::Idle);
}

#[test]
fn zero_debounce_clears_immediately() {
    let mut engine = engine_with(config().with_leave_debounce_ms(0));
    engine.pointer_move(0.0, 50.0, ms(0));
    engine.pointer_leave(ms(1));
    assert_eq!(engine.interaction_phase(), InteractionPhase::Idle);
}

#[test]
fn teardown_ignores_later_events() {
    let mut engine = engine();
    engine.pointer_move(0.0, 50.0, ms(0));
    engine.pointer_leave(ms(5));
    engine.teardown();

    engine.pointer_move(50.0, 0.0, ms(10));
    engine.pointer_click(50.0, 0.0, ms(20));
    engine.advance(ms(1_000));
    assert_eq!(engine.interaction_phase(), InteractionPhase::Idle);
    assert!(engine.interaction_state().is_torn_down());
}

#[test]
fn overlapping_markers_resolve_to_the_topmost() {
    let mut engine = engine();
    engine
        .add_series(
            Series::from_pairs("hero", "Hero", ALPHA, &[(2.0, 20.0)])
                .expect("valid hero")
                .highlighted(true),
        )
        .expect("add hero");

    assert_eq!(
        engine.hit_test(50.0, 0.0),
        Some(PointTarget::point("hero", 2.0))
    );
}

#[test]
fn pointer_outside_hit_radius_hits_nothing() {
    let engine = engine();
    assert!(engine.hit_test(25.0, 10.0).is_none());
    assert!(engine.hit_test(f64::NAN, 10.0).is_none());
}

#[test]
fn column_mode_collects_every_series_at_the_domain_value() {
    let mut engine = engine_with(config().with_hit_test_mode(HitTestMode::Columns));
    engine.pointer_move(58.0, 90.0, ms(0));

    let datum = engine.active_datum().expect("column datum");
    assert_eq!(datum.target, PointTarget::column(2.0));
    assert_eq!(datum.entries.len(), 2);
    // Anchor hangs from the highest marker of the column.
    assert_eq!(datum.anchor.x, 50.0);
    assert_eq!(datum.anchor.y, 0.0);
}

#[test]
fn column_mode_ignores_pointer_outside_plot() {
    let engine = engine_with(config().with_hit_test_mode(HitTestMode::Columns));
    assert!(engine.hit_test(140.0, 50.0).is_none());
}

#[test]
fn removing_the_pinned_series_clears_the_pin() {
    let mut engine = engine();
    engine.click_target(PointTarget::point("beta", 1.0));
    engine
        .remove_series(&SeriesId::from("beta"))
        .expect("beta exists");

    assert_eq!(engine.interaction_phase(), InteractionPhase::Idle);
    assert!(engine.remove_series(&SeriesId::from("beta")).is_err());
}

#[test]
fn replacing_series_resets_interaction() {
    let mut engine = engine();
    engine.click_target(PointTarget::point("alpha", 2.0));
    engine
        .set_series(vec![
            Series::from_pairs("alpha", "Alpha", ALPHA, &[(1.0, 1.0), (3.0, 2.0)])
                .expect("valid alpha"),
        ])
        .expect("set series");

    assert_eq!(engine.interaction_phase(), InteractionPhase::Idle);
}

#[test]
fn duplicate_series_ids_are_rejected() {
    let mut engine = engine();
    let result = engine.set_series(vec![
        Series::from_pairs("same", "One", ALPHA, &[(1.0, 1.0)]).expect("valid"),
        Series::from_pairs("same", "Two", BETA, &[(2.0, 1.0)]).expect("valid"),
    ]);

    assert!(result.is_err());
    assert_eq!(engine.series_count(), 2, "previous data is kept");
}

#[test]
fn lenient_load_drops_invalid_series() {
    let mut engine = engine();
    let dropped = engine.set_series_lenient(vec![
        Series::from_pairs("ok", "Ok", ALPHA, &[(1.0, 1.0), (2.0, 2.0)]),
        Series::from_pairs("bad", "Bad", BETA, &[(2.0, 1.0), (1.0, 2.0)]),
        Series::from_pairs("ok", "Again", BETA, &[(1.0, 3.0)]),
    ]);

    assert_eq!(dropped, 2);
    assert_eq!(engine.series_count(), 1);
}
