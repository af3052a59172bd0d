// File: crates/chart-shape/tests/geometry.rs
// Purpose: Per-datum x/y placement, baselines, same-sign stacking and hit testing.

use ahash::AHashMap;
use chart_shape::{
    AxisScales, BarOffset, ChartType, Classifier, ContinuousScale, DataOrder, DataValue, Datum, GeometryEngine, MarkerKind,
    Point, Rect, Series, SeriesStore, ShapeConfig, ShapeNode, StepType,
};

// x: 0..10 -> 0..1000, y: -100..100 -> 200..0, so y(v) = 100 - v
fn scales() -> AxisScales {
    AxisScales::new(
        ContinuousScale::new_linear((0.0, 10.0), (0.0, 1000.0)),
        ContinuousScale::new_linear((-100.0, 100.0), (200.0, 0.0)),
    )
}

fn bars(store: &SeriesStore) -> Classifier {
    let mut c = Classifier::new();
    c.set_targets(store.ids().map(str::to_string).collect::<Vec<_>>());
    c.assign_type(&[], ChartType::Bar);
    c
}

#[test]
fn two_bars_spread_around_x() {
    let store = SeriesStore::new(vec![
        Series::with_data("a", &[(1.0, 5.0)]),
        Series::with_data("b", &[(1.0, 7.0)]),
    ]);
    let classifier = bars(&store);
    let scales = scales();
    let offset = BarOffset::Width(10.0);

    let cfg = ShapeConfig::default();
    let engine = GeometryEngine::new(&classifier, &scales, &cfg, &store);
    let indices = engine.shape_indices(|s| classifier.is_bar_type(s));
    let x = engine.shape_x(&offset, &indices, false);
    assert_eq!(x(&store.all()[0].values[0]), 90.0);
    assert_eq!(x(&store.all()[1].values[0]), 100.0);

    let padded = ShapeConfig { bar_padding: 2.0, ..Default::default() };
    let engine = GeometryEngine::new(&classifier, &scales, &padded, &store);
    let x = engine.shape_x(&offset, &indices, false);
    assert_eq!(x(&store.all()[0].values[0]), 89.0);
    assert_eq!(x(&store.all()[1].values[0]), 101.0);
}

#[test]
fn width_table_centres_the_group() {
    let store = SeriesStore::new(vec![
        Series::with_data("a", &[(1.0, 5.0)]),
        Series::with_data("b", &[(1.0, 7.0)]),
    ]);
    let classifier = bars(&store);
    let scales = scales();
    let cfg = ShapeConfig::default();
    let engine = GeometryEngine::new(&classifier, &scales, &cfg, &store);
    let indices = engine.shape_indices(|s| classifier.is_bar_type(s));

    let offset = BarOffset::Table { width: 10.0, per_series: AHashMap::new(), total: vec![10.0, 10.0] };
    let x = engine.shape_x(&offset, &indices, false);
    assert_eq!(x(&store.all()[0].values[0]), 90.0);
    assert_eq!(x(&store.all()[1].values[0]), 100.0);
}

#[test]
fn missing_x_places_at_zero() {
    let mut s = Series::new("a");
    s.push(None, Some(3.0.into()));
    let store = SeriesStore::new(vec![s]);
    let classifier = bars(&store);
    let scales = scales();
    let cfg = ShapeConfig { bar_padding: 4.0, ..Default::default() };
    let engine = GeometryEngine::new(&classifier, &scales, &cfg, &store);
    let indices = engine.shape_indices(|_| true);
    let x = engine.shape_x(&BarOffset::Width(10.0), &indices, false);
    assert_eq!(x(&store.all()[0].values[0]), 0.0);
}

#[test]
fn y_min_anchors_positive_domains_only_when_ungrouped() {
    let store = SeriesStore::new(vec![Series::with_data("a", &[(0.0, 10.0)])]);
    let classifier = Classifier::new();
    let positive = AxisScales::new(
        ContinuousScale::new_linear((0.0, 10.0), (0.0, 100.0)),
        ContinuousScale::new_linear((5.0, 50.0), (100.0, 0.0)),
    );

    let cfg = ShapeConfig::default();
    let engine = GeometryEngine::new(&classifier, &positive, &cfg, &store);
    assert_eq!(engine.shape_y_min("a"), 5.0);

    let grouped = ShapeConfig { data_groups: vec![vec!["a".into()]], ..Default::default() };
    let engine = GeometryEngine::new(&classifier, &positive, &grouped, &store);
    assert_eq!(engine.shape_y_min("a"), 0.0);

    let mixed = scales();
    let engine = GeometryEngine::new(&classifier, &mixed, &cfg, &store);
    assert_eq!(engine.shape_y_min("a"), 0.0);
}

#[test]
fn stacking_skips_opposite_signs() {
    let store = SeriesStore::new(vec![
        Series::with_data("a", &[(0.0, 10.0), (1.0, 20.0)]),
        Series::with_data("b", &[(0.0, -5.0), (1.0, 30.0)]),
    ]);
    let classifier = bars(&store);
    let scales = scales();
    let cfg = ShapeConfig { data_groups: vec![vec!["a".into(), "b".into()]], ..Default::default() };
    let engine = GeometryEngine::new(&classifier, &scales, &cfg, &store);

    let indices = engine.shape_indices(|s| classifier.is_bar_type(s));
    assert_eq!(indices.ordinal("a"), indices.ordinal("b"));

    let offset = engine.shape_offset(|s| classifier.is_bar_type(s), &indices, false);
    let a = &store.all()[0].values;
    let b = &store.all()[1].values;

    // a has the smaller absolute sum, so it is drawn first and sits on the baseline
    assert_eq!(offset(&a[0], 0), 100.0);
    assert_eq!(offset(&a[1], 1), 100.0);
    // b's negative point does not stack on a's positive one
    assert_eq!(offset(&b[0], 0), 100.0);
    // b's positive point stacks on a's 20
    assert_eq!(offset(&b[1], 1), 80.0);
}

#[test]
fn stacking_falls_back_to_matching_x() {
    let store = SeriesStore::new(vec![
        Series::with_data("a", &[(1.0, 10.0), (2.0, 20.0)]),
        Series::with_data("b", &[(2.0, 40.0)]),
    ]);
    let classifier = bars(&store);
    let scales = scales();
    let cfg = ShapeConfig {
        data_groups: vec![vec!["a".into(), "b".into()]],
        data_order: chart_shape::DataOrder::None,
        ..Default::default()
    };
    let engine = GeometryEngine::new(&classifier, &scales, &cfg, &store);
    let indices = engine.shape_indices(|s| classifier.is_bar_type(s));
    let offset = engine.shape_offset(|s| classifier.is_bar_type(s), &indices, false);

    // b's row 0 sits at x=2, which is a's row 1
    let b0 = &store.all()[1].values[0];
    assert_eq!(offset(b0, 0), 80.0);
}

#[test]
fn ungrouped_series_do_not_stack() {
    let store = SeriesStore::new(vec![
        Series::with_data("a", &[(0.0, 10.0)]),
        Series::with_data("b", &[(0.0, 30.0)]),
    ]);
    let classifier = bars(&store);
    let scales = scales();
    let cfg = ShapeConfig::default();
    let engine = GeometryEngine::new(&classifier, &scales, &cfg, &store);
    let indices = engine.shape_indices(|s| classifier.is_bar_type(s));
    let offset = engine.shape_offset(|s| classifier.is_bar_type(s), &indices, false);
    assert_eq!(offset(&store.all()[1].values[0], 0), 100.0);
}

#[test]
fn normalized_y_uses_row_share() {
    let store = SeriesStore::new(vec![
        Series::with_data("a", &[(0.0, 1.0)]),
        Series::with_data("b", &[(0.0, 3.0)]),
    ]);
    let classifier = bars(&store);
    let scales = AxisScales::new(
        ContinuousScale::new_linear((0.0, 10.0), (0.0, 100.0)),
        ContinuousScale::new_linear((0.0, 100.0), (100.0, 0.0)),
    );
    let cfg = ShapeConfig {
        data_groups: vec![vec!["a".into(), "b".into()]],
        data_stack_normalize: true,
        ..Default::default()
    };
    let engine = GeometryEngine::new(&classifier, &scales, &cfg, &store);
    let y = engine.shape_y(false);
    assert_eq!(y(&store.all()[0].values[0]), 75.0);
    assert_eq!(y(&store.all()[1].values[0]), 25.0);
}

#[test]
fn plain_y_scales_the_raw_value() {
    let store = SeriesStore::new(vec![Series::with_data("a", &[(0.0, 40.0)])]);
    let classifier = Classifier::new();
    let scales = scales();
    let cfg = ShapeConfig::default();
    let engine = GeometryEngine::new(&classifier, &scales, &cfg, &store);
    let y = engine.shape_y(false);
    assert_eq!(y(&store.all()[0].values[0]), 60.0);
}

#[test]
fn y2_series_use_their_own_domain() {
    let store = SeriesStore::new(vec![
        Series::with_data("a", &[(0.0, 20.0)]),
        Series::with_data("b", &[(0.0, 30.0)]),
        Series::with_data("c", &[(0.0, 40.0)]),
    ]);
    let classifier = bars(&store);
    // y2: 10..60 -> 200..0, so y2(v) = 200 - 4 * (v - 10)
    let scales = scales().with_y2(ContinuousScale::new_linear((10.0, 60.0), (200.0, 0.0)));
    let cfg = ShapeConfig::from_json(
        r#"{"data_axes": {"a": "y2", "b": "y2", "c": "y2"}, "data_groups": [["a", "b"]]}"#,
    )
    .unwrap();
    let engine = GeometryEngine::new(&classifier, &scales, &cfg, &store);
    let values = |i: usize| &store.all()[i].values[0];

    let y = engine.shape_y(false);
    assert_eq!(y(values(2)), 80.0);
    assert_eq!(engine.shape_y_min("c"), 10.0);
    assert_eq!(engine.shape_y_min("a"), 0.0);

    let indices = engine.shape_indices(|s| classifier.is_bar_type(s));
    let offset = engine.shape_offset(|s| classifier.is_bar_type(s), &indices, false);
    // grouped on y2: baseline y2(0) = 240, a's 20 lifts b to y2(20) = 160
    assert_eq!(offset(values(0), 0), 240.0);
    assert_eq!(offset(values(1), 0), 160.0);
    // ungrouped with a positive domain: baseline y2(10) = 200
    assert_eq!(offset(values(2), 0), 200.0);
}

#[test]
fn bubble_y_is_placed_by_its_y_component() {
    let mut s = Series::new("bub");
    s.push(Some(0.0), Some(DataValue::Bubble { y: 40.0, z: 9.0 }));
    let store = SeriesStore::new(vec![s]);
    let mut classifier = Classifier::new();
    classifier.set_targets(["bub"]);
    classifier.assign_type(&["bub"], ChartType::Bubble);
    let scales = scales();
    let cfg = ShapeConfig::default();
    let engine = GeometryEngine::new(&classifier, &scales, &cfg, &store);

    let d = &store.all()[0].values[0];
    assert!(classifier.is_bubble_z_type(d));
    assert_eq!(engine.shape_y(false)(d), 60.0);
}

#[test]
fn step_series_stack_on_padded_head_and_tail() {
    let store = SeriesStore::new(vec![
        Series::with_data("a", &[(1.0, 10.0), (2.0, 20.0)]),
        Series::with_data("b", &[(0.0, 5.0), (3.0, 5.0)]),
    ]);
    let mut classifier = Classifier::new();
    classifier.set_targets(store.ids().map(str::to_string).collect::<Vec<_>>());
    classifier.assign_type(&[], ChartType::AreaStep);
    let scales = scales();
    let cfg = ShapeConfig {
        data_groups: vec![vec!["a".into(), "b".into()]],
        data_order: DataOrder::None,
        line_step_type: StepType::StepAfter,
        ..Default::default()
    };
    let engine = GeometryEngine::new(&classifier, &scales, &cfg, &store);
    let indices = engine.shape_indices(|s| classifier.is_area_type(s));

    let context = engine.shape_offset_data(|s| classifier.is_area_type(s));
    let a_xs: Vec<f64> = context.targets()[0].rows.iter().filter_map(|d| d.x).collect();
    assert_eq!(a_xs, vec![0.0, 1.0, 2.0, 3.0]);

    let offset = engine.shape_offset(|s| classifier.is_area_type(s), &indices, false);
    let b = &store.all()[1].values;
    // a's head copy sits at x=0 with 10, its tail copy at x=3 with 20
    assert_eq!(offset(&b[0], 0), 90.0);
    assert_eq!(offset(&b[1], 1), 80.0);
}

#[test]
fn hidden_series_is_never_within() {
    let mut store = SeriesStore::new(vec![Series::with_data("a", &[(0.0, 0.0)])]);
    store.hide("a");
    let classifier = Classifier::new();
    let scales = scales();
    let cfg = ShapeConfig::default();
    let engine = GeometryEngine::new(&classifier, &scales, &cfg, &store);

    let d = Datum::new("a", 0, 0.0, 0.0);
    let at = Point::new(0.0, 100.0);
    let nodes = [
        ShapeNode::Path { bar: None },
        ShapeNode::Path { bar: Some(Rect::from_ltrb(-5.0, 90.0, 5.0, 110.0)) },
        ShapeNode::Marker { kind: MarkerKind::Circle, center: at, radius: 3.0 },
    ];
    for node in &nodes {
        assert!(!engine.is_within_shape(node, &d, at));
    }
}

#[test]
fn markers_bars_and_paths_hit_test() {
    let store = SeriesStore::new(vec![
        Series::with_data("line", &[(0.0, 0.0)]),
        Series::with_data("step", &[(0.0, 0.0)]),
        Series::with_data("bubble", &[(0.0, 0.0)]),
    ]);
    let mut classifier = Classifier::new();
    classifier.set_targets(store.ids().map(str::to_string).collect::<Vec<_>>());
    classifier.assign_type(&["step"], ChartType::Step);
    classifier.assign_type(&["bubble"], ChartType::Bubble);
    let scales = scales();
    let cfg = ShapeConfig::default();
    let engine = GeometryEngine::new(&classifier, &scales, &cfg, &store);

    let center = Point::new(50.0, 50.0);
    let marker = ShapeNode::Marker { kind: MarkerKind::Circle, center, radius: 5.0 };
    let line = Datum::new("line", 0, 0.0, 0.0);

    // plain markers use the point sensitivity (10px)
    assert!(engine.is_within_shape(&marker, &line, Point::new(59.0, 50.0)));
    assert!(!engine.is_within_shape(&marker, &line, Point::new(61.0, 50.0)));

    // bubbles: 4 * 5 * 1.5 = 30px
    let bubble = Datum::new("bubble", 0, 0.0, 0.0);
    assert!(engine.is_within_shape(&marker, &bubble, Point::new(79.0, 50.0)));
    assert!(!engine.is_within_shape(&marker, &bubble, Point::new(81.0, 50.0)));

    // steps compare against the scaled y (value 0 -> 100px) within 30px, any x
    let step = Datum::new("step", 0, 0.0, 0.0);
    assert!(engine.is_within_shape(&marker, &step, Point::new(500.0, 71.0)));
    assert!(!engine.is_within_shape(&marker, &step, Point::new(500.0, 69.0)));

    let bar = ShapeNode::Path { bar: Some(Rect::from_ltwh(10.0, 10.0, 20.0, 40.0)) };
    assert!(engine.is_within_shape(&bar, &line, Point::new(31.0, 30.0)));
    assert!(!engine.is_within_shape(&bar, &line, Point::new(32.0, 30.0)));

    assert!(engine.is_within_shape(&ShapeNode::Path { bar: None }, &line, Point::new(999.0, 999.0)));
    assert!(!engine.is_within_shape(&ShapeNode::Other, &line, center));
}
