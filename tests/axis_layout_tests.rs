use column_chart_rs::core::{
    AxisLayout, BandPadding, GeometryEngine, KeyAxisLocation, MAX_VALUE_TICK_COUNT, Orientation,
    ValueAxisLocation, ValueDomain, Viewport, nice_ticks,
};

fn engine() -> GeometryEngine {
    GeometryEngine::new(
        Orientation::COLUMN,
        Viewport::new(400, 500),
        ["a", "b"],
        ValueDomain::new(-10.0, 10.0),
        BandPadding::new(0.0, 0.0),
    )
    .expect("geometry engine")
}

#[test]
fn nice_ticks_pick_round_steps() {
    assert_eq!(nice_ticks(-10.0, 10.0, 5), vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
    assert_eq!(nice_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(nice_ticks(0.0, 100.0, 10).len(), 11);
}

#[test]
fn nice_ticks_handle_degenerate_requests() {
    assert!(nice_ticks(0.0, 10.0, 0).is_empty());
    assert!(nice_ticks(f64::NAN, 10.0, 5).is_empty());
    assert_eq!(nice_ticks(3.0, 3.0, 5), vec![3.0]);
}

#[test]
fn nice_ticks_keep_reversed_order() {
    assert_eq!(nice_ticks(10.0, -10.0, 5), vec![10.0, 5.0, 0.0, -5.0, -10.0]);
}

#[test]
fn key_axis_offset_follows_location() {
    let engine = engine();

    let at = |location| {
        AxisLayout::resolve(&engine, location, ValueAxisLocation::Start, 5).key_axis_offset
    };

    assert_eq!(at(KeyAxisLocation::Min), 500.0);
    assert_eq!(at(KeyAxisLocation::Zero), 250.0);
    assert_eq!(at(KeyAxisLocation::Max), 0.0);
}

#[test]
fn value_axis_offset_follows_location() {
    let engine = engine();

    let start = AxisLayout::resolve(&engine, KeyAxisLocation::Min, ValueAxisLocation::Start, 5);
    let end = AxisLayout::resolve(&engine, KeyAxisLocation::Min, ValueAxisLocation::End, 5);

    assert_eq!(start.value_axis_offset, 0.0);
    assert_eq!(end.value_axis_offset, 400.0);
}

#[test]
fn ticks_are_placed_on_band_centers_and_value_positions() {
    let layout = AxisLayout::resolve(
        &engine(),
        KeyAxisLocation::Zero,
        ValueAxisLocation::Start,
        5,
    );

    let keys: Vec<_> = layout
        .key_ticks
        .iter()
        .map(|tick| (tick.key.as_str(), tick.position))
        .collect();
    assert_eq!(keys, vec![("a", 100.0), ("b", 300.0)]);

    let values: Vec<_> = layout
        .value_ticks
        .iter()
        .map(|tick| (tick.value, tick.position))
        .collect();
    assert_eq!(values.first(), Some(&(-10.0, 500.0)));
    assert_eq!(values[2], (0.0, 250.0));
    assert_eq!(values.last(), Some(&(10.0, 0.0)));
}

#[test]
fn nice_ticks_cap_oversized_counts() {
    let ticks = nice_ticks(-10.0, 10.0, usize::MAX);

    assert_eq!(ticks.len(), 2 * 500 + 1);
    assert_eq!(ticks.first(), Some(&-10.0));
    assert_eq!(ticks.last(), Some(&10.0));
    assert!(ticks.len() <= 2 * MAX_VALUE_TICK_COUNT + 1);
}

#[test]
fn nice_ticks_stay_bounded_on_extreme_domains() {
    for (start, stop) in [(1e30, 1e30 + 1.0), (-1e300, 1e300), (-1e-300, 1e-300)] {
        let ticks = nice_ticks(start, stop, MAX_VALUE_TICK_COUNT);
        assert!(ticks.len() <= 2 * MAX_VALUE_TICK_COUNT + 1, "{start}..{stop}");
        assert!(ticks.iter().all(|tick| tick.is_finite()));
    }
}
