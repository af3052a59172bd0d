// File: crates/chart-shape/tests/classify.rs
// Purpose: Chart-type presence tiers, assignment round-trips and derived predicates.

use chart_shape::{ChartType, Classifier, Datum, Series, ShapeConfig, TypeCategory};

fn loaded(ids: &[&str]) -> Classifier {
    let mut c = Classifier::new();
    c.set_targets(ids.iter().copied());
    c
}

#[test]
fn unassigned_series_are_lines() {
    let c = loaded(&["a", "b"]);
    assert!(c.is_line_type("a"));
    assert!(c.is_line_type("never-seen"));
    assert_eq!(c.type_of("a"), ChartType::Line);
    assert!(c.has_type(ChartType::Line));
    assert!(!c.has_type(ChartType::Bar));
}

#[test]
fn assign_then_refresh_moves_presence() {
    let mut c = loaded(&["a"]);
    c.refresh_current_types();
    assert_eq!(c.current_types(), &[ChartType::Line]);

    c.assign_type(&["a"], ChartType::Bar);
    c.refresh_current_types();
    assert!(c.has_type(ChartType::Bar));
    assert!(!c.has_type(ChartType::Line));
    assert_eq!(c.current_types(), &[ChartType::Bar]);

    // idempotent
    c.refresh_current_types();
    assert_eq!(c.current_types(), &[ChartType::Bar]);
}

#[test]
fn line_stays_present_while_another_series_keeps_it() {
    let mut c = loaded(&["a", "b"]);
    c.assign_type(&["a"], ChartType::Bar);
    c.refresh_current_types();
    assert!(c.has_type(ChartType::Line));
    assert!(c.has_type(ChartType::Bar));
}

#[test]
fn reassigning_same_type_skips_fade_in() {
    let mut c = loaded(&["a"]);
    c.assign_type(&["a"], ChartType::Area);
    assert!(!c.is_without_fade_in("a"));
    c.assign_type(&["a"], ChartType::Area);
    assert!(c.is_without_fade_in("a"));
    assert!(!c.is_without_fade_in("b"));
}

#[test]
fn empty_assignment_sets_default_for_everyone() {
    let mut c = loaded(&["a", "b"]);
    c.assign_type(&[], ChartType::Spline);
    assert_eq!(c.default_type(), ChartType::Spline);
    assert!(c.is_spline_type("a"));
    assert!(c.is_spline_type("b"));

    // series loaded later pick up the default
    c.set_targets(["a", "b", "c"]);
    c.apply_default_type();
    assert_eq!(c.type_of("c"), ChartType::Spline);
}

#[test]
fn assignment_tier_without_loaded_series() {
    let cfg = ShapeConfig::from_json(r#"{"data_types": {"a": "bar"}}"#).unwrap();
    let c = Classifier::from_config(&cfg);
    assert!(c.has_type(ChartType::Bar));
    assert!(!c.has_type(ChartType::Line));
}

#[test]
fn default_tier_when_nothing_is_known() {
    let c = Classifier::new();
    assert!(c.has_type(ChartType::Line));
    assert!(!c.has_type(ChartType::Pie));

    let cfg = ShapeConfig { data_type: Some(ChartType::Pie), ..Default::default() };
    let c = Classifier::from_config(&cfg);
    assert!(c.has_type(ChartType::Pie));
}

#[test]
fn subset_scan_counts_missing_as_line() {
    let mut c = loaded(&["a", "b"]);
    c.assign_type(&["a"], ChartType::Bar);
    assert!(c.has_type_with(ChartType::Line, Some(&["b"][..]), true));
    assert!(!c.has_type_with(ChartType::Line, Some(&["a"][..]), true));
}

#[test]
fn empty_subset_scans_assignments_only() {
    let mut c = loaded(&["a", "b"]);
    c.assign_type(&["b"], ChartType::Bar);
    // "a" is unassigned, but an empty subset never looks at the loaded series
    assert!(!c.has_type_with(ChartType::Line, Some(&[][..]), true));
    assert!(c.has_type_with(ChartType::Bar, Some(&[][..]), true));
    assert!(c.has_type_with(ChartType::Line, None, true));
}

#[test]
fn category_presence_honours_exclusions() {
    let mut c = loaded(&["p"]);
    c.assign_type(&["p"], ChartType::Pie);
    assert!(c.has_arc_type(None, &[]));
    assert!(!c.has_arc_type(None, &[ChartType::Pie]));
    assert!(c.has_category(TypeCategory::Arc));
    assert!(!c.has_category(TypeCategory::Step));

    c.assign_type(&["p"], ChartType::AreaStep);
    assert!(c.has_category(TypeCategory::Step));
    assert!(c.has_category(TypeCategory::Area));
    assert!(c.has_point_type());
}

#[test]
fn multi_gauge_needs_gauge_and_multi_mode() {
    let mut c = loaded(&["g"]);
    c.assign_type(&["g"], ChartType::Gauge);
    let single = ShapeConfig::default();
    let multi = ShapeConfig { gauge_type: "multi".into(), ..Default::default() };
    assert!(!c.has_multi_arc_gauge(&single));
    assert!(c.has_multi_arc_gauge(&multi));
}

#[test]
fn derived_predicates_compose() {
    let mut c = loaded(&["r", "s", "d"]);
    c.assign_type(&["r"], ChartType::AreaSplineRange);
    c.assign_type(&["s"], ChartType::Scatter);
    c.assign_type(&["d"], ChartType::Donut);

    assert!(c.is_area_range_type("r"));
    assert!(c.is_spline_type("r"));
    assert!(c.is_area_type("r"));
    assert!(c.is_line_type("r"));
    assert!(c.is_scatter_type("s"));
    assert!(!c.is_line_type("s"));
    assert!(c.is_donut_type("d"));
    assert!(c.is_arc_type("d"));
    assert!(!c.is_pie_type("d"));
    assert!(c.is_type_of("d", &[ChartType::Pie, ChartType::Donut]));
}

#[test]
fn data_selectors_follow_classification() {
    let mut c = loaded(&["bars", "pie"]);
    c.assign_type(&["bars"], ChartType::Bar);
    c.assign_type(&["pie"], ChartType::Pie);

    let bars = Series::with_data("bars", &[(0.0, 1.0), (1.0, 2.0)]);
    let pie = Series::with_data("pie", &[(0.0, 3.0)]);

    assert_eq!(c.bar_data(&bars).len(), 2);
    assert!(c.bar_data(&pie).is_empty());
    assert!(c.line_data(&bars).is_empty());
    assert_eq!(c.labelish_data(&bars).len(), 2);
    assert!(c.labelish_data(&pie).is_empty());
    assert_eq!(c.bar_line_bubble_data(&bars).len(), 2);

    let slice = Datum::new("pie", 0, 0.0, 3.0);
    assert_eq!(c.arc_data(&slice).len(), 1);
    let bar_point = Datum::new("bars", 0, 0.0, 1.0);
    assert!(c.arc_data(&bar_point).is_empty());
}

#[test]
fn circle_point_requires_no_pattern() {
    let c = Classifier::new();
    let mut cfg = ShapeConfig::default();
    assert!(c.is_circle_point(&cfg));
    cfg.point_pattern = vec!["<polygon points='0 0 1 1'/>".into()];
    assert!(!c.is_circle_point(&cfg));
}

#[test]
fn chart_type_names_parse() {
    assert_eq!("area-step-range".parse::<ChartType>().unwrap(), ChartType::AreaStepRange);
    assert_eq!(ChartType::AreaLineRange.to_string(), "area-line-range");
    assert!("histogram".parse::<ChartType>().is_err());
    assert_eq!("Arc".parse::<TypeCategory>().unwrap(), TypeCategory::Arc);
}
