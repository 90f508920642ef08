use approx::assert_abs_diff_eq;
use column_chart_rs::api::{ChartConfig, ColumnChart, DataPoint, HistorySource};
use column_chart_rs::core::{
    ChartDiagnostic, DomainDirection, Easing, RectBounds, Sign, TransitionKind, Viewport,
};
use column_chart_rs::error::ChartError;
use column_chart_rs::render::{BarDirective, Color, RecordingSurface, RenderSurface};

fn config() -> ChartConfig {
    ChartConfig::new(Viewport::new(400, 500), -10.0, 10.0)
        .with_band_padding(0.0, 0.0)
        .with_transition_time_ms(800.0)
}

fn created_chart(data: Vec<DataPoint>, config: ChartConfig) -> ColumnChart<RecordingSurface> {
    let mut chart = ColumnChart::new(RecordingSurface::new(), data, config).expect("chart init");
    let report = chart.create();
    assert!(report.is_clean(), "unexpected diagnostics: {report:?}");
    chart
}

#[test]
fn create_draws_initial_bars_without_animation() {
    let chart = created_chart(
        vec![DataPoint::new("a", 5.0), DataPoint::new("b", -2.0)],
        config(),
    );
    let surface = chart.surface();

    assert!(chart.is_created());
    assert_eq!(surface.bar_count(), 2);
    assert!(matches!(
        surface.bar("a").expect("bar a").directive,
        BarDirective::Immediate { .. }
    ));
    assert_eq!(
        surface.current_rect("a"),
        Some(RectBounds::new(0.0, 125.0, 200.0, 125.0))
    );
    assert_eq!(chart.last_value("b"), Some(-2.0));
}

#[test]
fn create_uses_sign_colors_and_surface_layout() {
    let pos = Color::rgb(0.0, 1.0, 0.0);
    let neg = Color::rgb(1.0, 0.0, 0.0);
    let chart = created_chart(
        vec![
            DataPoint::new("a", 5.0).with_colors(pos, neg),
            DataPoint::new("b", -2.0).with_colors(pos, neg),
        ],
        config(),
    );
    let surface = chart.surface();

    assert_eq!(surface.current_color("a"), Some(pos));
    assert_eq!(surface.current_color("b"), Some(neg));

    let layout = surface.layout().expect("layout");
    let margins = chart.config().margins;
    assert_eq!(layout.outer_width, 400.0 + margins.left + margins.right);
    assert_eq!(layout.plot_origin_y, margins.top);
    assert!(surface.axes().is_some());
}

#[test]
fn second_create_is_a_reported_no_op() {
    let mut chart = created_chart(vec![DataPoint::new("a", 1.0)], config());

    let report = chart.create();

    assert_eq!(report.diagnostics, vec![ChartDiagnostic::AlreadyCreated]);
    assert_eq!(chart.surface().history().len(), 1);
}

#[test]
fn update_before_create_is_a_reported_no_op() {
    let mut chart = ColumnChart::new(
        RecordingSurface::new(),
        vec![DataPoint::new("a", 1.0)],
        config(),
    )
    .expect("chart init");

    let report = chart.update(vec![DataPoint::new("a", 2.0)]);

    assert_eq!(report.diagnostics, vec![ChartDiagnostic::NotYetCreated]);
    assert!(report.plans.is_empty());
    assert_eq!(chart.surface().bar_count(), 0);
}

#[test]
fn sign_crossing_update_splits_the_passed_transition_time() {
    let mut chart = created_chart(vec![DataPoint::new("a", 5.0)], config());

    let report = chart.update_with_transition_time(vec![DataPoint::new("a", -3.0)], 1_200.0);

    assert!(report.is_clean());
    let plan = report.plan("a").expect("plan for a");
    assert_eq!(plan.kind, TransitionKind::PosToNeg);
    assert_eq!(plan.phases.len(), 2);
    assert_abs_diff_eq!(plan.total_duration_ms(), 1_200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(plan.phases[0].duration_ms, 750.0, epsilon = 1e-9);
    assert_abs_diff_eq!(plan.phases[1].duration_ms, 450.0, epsilon = 1e-9);
}

#[test]
fn update_hands_phased_directive_to_surface() {
    let pos = Color::rgb(0.0, 0.0, 1.0);
    let neg = Color::rgb(1.0, 0.5, 0.0);
    let mut chart = created_chart(
        vec![DataPoint::new("a", 5.0).with_colors(pos, neg)],
        config(),
    );

    chart.update(vec![
        DataPoint::new("a", -3.0)
            .with_colors(pos, neg)
            .with_delay_ms(40.0),
    ]);

    let BarDirective::Transition(transition) = &chart.surface().bar("a").expect("bar").directive
    else {
        panic!("expected phased transition");
    };
    assert_eq!(transition.delay_ms, 40.0);
    assert_eq!(transition.phases.len(), 2);
    assert_eq!(transition.phases[0].easing, Easing::CubicIn);
    assert_eq!(transition.phases[0].color, pos);
    assert_eq!(transition.phases[0].target.height, 0.0);
    assert_eq!(transition.phases[1].easing, Easing::CubicOut);
    assert_eq!(transition.phases[1].color, neg);
    assert_abs_diff_eq!(transition.phases[1].target.height, 75.0, epsilon = 1e-9);
}

#[test]
fn same_sign_update_uses_default_transition_time() {
    let mut chart = created_chart(vec![DataPoint::new("a", 5.0)], config());

    let report = chart.update(vec![DataPoint::new("a", 8.0)]);

    let plan = report.plan("a").expect("plan");
    assert_eq!(plan.kind, TransitionKind::PosToPos);
    assert_eq!(plan.phases.len(), 1);
    assert_eq!(plan.phases[0].duration_ms, 800.0);
    assert_eq!(plan.phases[0].easing, Easing::Cubic);
    assert_eq!(chart.last_value("a"), Some(8.0));
}

#[test]
fn unknown_and_non_finite_points_are_skipped() {
    let mut chart = created_chart(
        vec![DataPoint::new("a", 1.0), DataPoint::new("b", 1.0)],
        config(),
    );

    let report = chart.update(vec![
        DataPoint::new("a", 2.0),
        DataPoint::new("ghost", 3.0),
        DataPoint::new("b", f64::NAN),
    ]);

    assert_eq!(
        report.diagnostics,
        vec![
            ChartDiagnostic::UnknownKey {
                key: "ghost".to_owned()
            },
            ChartDiagnostic::NonFiniteValue {
                key: "b".to_owned()
            },
        ]
    );
    assert_eq!(report.plans.len(), 1);
    assert!(report.plan("a").is_some());
    assert_eq!(chart.last_value("b"), Some(1.0));
    assert!(chart.surface().bar("ghost").is_none());
}

#[test]
fn invalid_transition_time_falls_back_to_default() {
    let mut chart = created_chart(vec![DataPoint::new("a", 1.0)], config());

    let report = chart.update_with_transition_time(vec![DataPoint::new("a", 2.0)], -5.0);

    assert_eq!(
        report.diagnostics,
        vec![ChartDiagnostic::InvalidTransitionTime { requested: -5.0 }]
    );
    assert_eq!(report.plan("a").expect("plan").total_duration_ms(), 800.0);
}

#[test]
fn out_of_domain_update_is_clamped_but_timed_on_raw_values() {
    let mut chart = created_chart(vec![DataPoint::new("a", 5.0)], config());

    let report = chart.update(vec![DataPoint::new("a", -15.0)]);

    let below: Vec<_> = report
        .diagnostics_matching(|d| {
            matches!(
                d,
                ChartDiagnostic::ValueOutOfDomain {
                    direction: DomainDirection::Below,
                    ..
                }
            )
        })
        .collect();
    assert_eq!(below.len(), 1);

    let plan = report.plan("a").expect("plan");
    assert_abs_diff_eq!(plan.phases[0].duration_fraction, 0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(plan.phases[1].duration_fraction, 0.75, epsilon = 1e-12);

    chart.surface_mut().finish_all();
    let rect = chart.surface().current_rect("a").expect("rect");
    assert_abs_diff_eq!(rect.y, 250.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rect.height, 250.0, epsilon = 1e-9);
}

#[test]
fn update_mid_animation_starts_from_in_flight_geometry() {
    let mut chart = created_chart(vec![DataPoint::new("a", 5.0)], config());
    chart.update(vec![DataPoint::new("a", -3.0)]);

    // Shrink phase lasts 500ms; halfway through cubic-in progress is 0.125.
    chart.surface_mut().advance(250.0);
    let report = chart.update(vec![DataPoint::new("a", 2.0)]);

    let plan = report.plan("a").expect("plan");
    assert_eq!(plan.kind, TransitionKind::PosToPos);
    assert_abs_diff_eq!(plan.start_value(), 4.375, epsilon = 1e-9);
}

#[test]
fn retained_history_ignores_in_flight_geometry() {
    let config = config().with_history_source(HistorySource::Retained);
    let mut chart = created_chart(vec![DataPoint::new("a", 5.0)], config);
    chart.update(vec![DataPoint::new("a", -3.0)]);
    chart.surface_mut().advance(250.0);

    let report = chart.update(vec![DataPoint::new("a", 2.0)]);

    let plan = report.plan("a").expect("plan");
    assert_eq!(plan.kind, TransitionKind::NegToPos);
    assert_eq!(plan.start_value(), -3.0);
}

#[test]
fn externally_edited_geometry_drives_next_classification() {
    let mut chart = created_chart(vec![DataPoint::new("a", 5.0)], config());
    // A bar showing -4 spans from the baseline (250) down to 350.
    chart
        .surface_mut()
        .override_rect("a", RectBounds::new(0.0, 250.0, 200.0, 100.0));

    let report = chart.update(vec![DataPoint::new("a", 6.0)]);

    let plan = report.plan("a").expect("plan");
    assert_eq!(plan.kind, TransitionKind::NegToPos);
    assert_abs_diff_eq!(plan.phases[0].duration_fraction, 0.4, epsilon = 1e-9);
    assert_abs_diff_eq!(plan.phases[1].duration_fraction, 0.6, epsilon = 1e-9);
}

#[test]
fn completed_transition_settles_on_target_geometry_and_color() {
    let mut chart = created_chart(vec![DataPoint::new("a", -4.0)], config());
    chart.update(vec![DataPoint::new("a", 4.0)]);

    chart.surface_mut().finish_all();

    let rect = chart.surface().current_rect("a").expect("rect");
    assert_abs_diff_eq!(rect.y, 150.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rect.height, 100.0, epsilon = 1e-9);
    assert_eq!(
        chart.surface().current_color("a"),
        Some(DataPoint::new("a", 4.0).color_for(Sign::Pos))
    );
}

#[test]
fn duplicate_keys_in_one_update_keep_the_last_point() {
    let mut chart = created_chart(vec![DataPoint::new("a", 1.0)], config());

    let report = chart.update(vec![DataPoint::new("a", 2.0), DataPoint::new("a", -2.0)]);

    assert_eq!(report.plans.len(), 1);
    assert_eq!(report.kind("a"), Some(TransitionKind::PosToNeg));
    assert_eq!(chart.last_value("a"), Some(-2.0));
}

#[test]
fn construction_rejects_bad_input() {
    let empty = ColumnChart::new(RecordingSurface::new(), Vec::new(), config());
    assert!(empty.is_err());

    let duplicate = ColumnChart::new(
        RecordingSurface::new(),
        vec![DataPoint::new("a", 1.0), DataPoint::new("a", 2.0)],
        config(),
    );
    assert!(duplicate.is_err());

    let non_finite = ColumnChart::new(
        RecordingSurface::new(),
        vec![DataPoint::new("a", f64::INFINITY)],
        config(),
    );
    assert!(non_finite.is_err());

    let inverted_domain = ColumnChart::new(
        RecordingSurface::new(),
        vec![DataPoint::new("a", 1.0)],
        ChartConfig::new(Viewport::new(10, 10), 5.0, -5.0),
    );
    assert!(inverted_domain.is_err());
}

#[test]
fn into_surface_returns_recorded_directives() {
    let mut chart = created_chart(vec![DataPoint::new("a", 1.0)], config());
    chart.update(vec![DataPoint::new("a", 3.0)]);

    let surface = chart.into_surface();

    assert_eq!(surface.history().len(), 2);
    assert_eq!(surface.history()[1].0, "a");
}

fn asymmetric_chart(value_min: f64, value_max: f64) -> ColumnChart<RecordingSurface> {
    created_chart(
        vec![DataPoint::new("a", 0.0), DataPoint::new("b", 0.0)],
        ChartConfig::new(Viewport::new(400, 411), value_min, value_max),
    )
}

#[test]
fn bar_at_zero_reads_back_as_positive_on_asymmetric_domain() {
    for (value_min, value_max) in [(-0.7, 2.3), (-0.1, 0.2)] {
        let mut chart = asymmetric_chart(value_min, value_max);

        let report = chart.update(vec![
            DataPoint::new("a", value_max),
            DataPoint::new("b", -0.05),
        ]);

        assert_eq!(report.kind("a"), Some(TransitionKind::PosToPos));
        assert_eq!(report.kind("b"), Some(TransitionKind::PosToNeg));
        let a = report.plan("a").expect("plan a");
        assert_eq!(a.start_value(), 0.0);
        assert_eq!(a.phases.len(), 1);
        let b = report.plan("b").expect("plan b");
        assert_eq!(b.phases[0].duration_ms, 0.0);
        assert_eq!(b.phases[0].sign, Sign::Pos);
    }
}

#[test]
fn construction_rejects_invalid_colors() {
    let bad = Color::rgb(f64::NAN, 0.0, 0.0);

    let result = ColumnChart::new(
        RecordingSurface::new(),
        vec![DataPoint::new("a", 1.0).with_colors(bad, Color::rgb(1.0, 0.0, 0.0))],
        config(),
    );

    assert!(matches!(result, Err(ChartError::InvalidData(message)) if message.contains("`a`")));
}

#[test]
fn update_skips_points_with_invalid_colors() {
    let mut chart = created_chart(
        vec![DataPoint::new("a", 1.0), DataPoint::new("b", 1.0)],
        config(),
    );
    let out_of_range = Color::rgba(0.0, 0.0, 0.0, 1.5);

    let report = chart.update(vec![
        DataPoint::new("a", -1.0).with_colors(Color::rgb(0.0, 0.0, 0.0), out_of_range),
        DataPoint::new("b", 2.0),
    ]);

    assert_eq!(
        report.diagnostics,
        vec![ChartDiagnostic::InvalidColor {
            key: "a".to_owned()
        }]
    );
    assert!(report.plan("a").is_none());
    assert!(report.plan("b").is_some());
    assert_eq!(chart.last_value("a"), Some(1.0));
}

#[test]
fn oversized_tick_count_is_rejected_at_construction() {
    let result = ColumnChart::new(
        RecordingSurface::new(),
        vec![DataPoint::new("a", 1.0)],
        config().with_value_tick_count(usize::MAX),
    );

    assert!(matches!(result, Err(ChartError::InvalidConfig(_))));
}
