// File: crates/demo/src/main.rs
// Summary: Demo loads long-format series CSV plus a JSON shape config, runs one geometry pass,
//          prints per-point geometry and SVG paths, and optionally renders a PNG.

mod load;

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_render_skia::{curve_path, palette, RenderOptions, Scene};
use chart_shape::{
    AxisScales, BarOffset, Classifier, ContinuousScale, GeometryEngine, Point, Rect, Scale, ScaleResolver,
    SeriesStore, ShapeConfig,
};
use tracing_subscriber::EnvFilter;

const WIDTH: i32 = 800;
const HEIGHT: i32 = 500;
const INSET: f64 = 50.0;
// share of each x step covered by a bar group
const BAR_RATIO: f64 = 0.6;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // data.csv [config.json] [out.png]; the config defaults to data.json next to the CSV
    let mut args = std::env::args().skip(1);
    let data_path = PathBuf::from(args.next().unwrap_or_else(|| "crates/demo/data/sample.csv".to_string()));
    let config_path = args.next().map(PathBuf::from).or_else(|| {
        let p = data_path.with_extension("json");
        p.exists().then_some(p)
    });
    let out_png = args.next().map(PathBuf::from);

    let store = load::load_series_csv(&data_path)
        .with_context(|| format!("failed to load CSV '{}'", data_path.display()))?;
    if store.all().is_empty() {
        anyhow::bail!("no series loaded; check the series/x/value headers");
    }
    let config = match &config_path {
        Some(p) => load::load_config(p)?,
        None => ShapeConfig::default(),
    };
    println!("Loaded {} series from {}", store.all().len(), data_path.display());

    let mut classifier = Classifier::from_config(&config);
    classifier.set_targets(store.ids().map(str::to_string).collect::<Vec<_>>());
    classifier.apply_default_type();
    classifier.refresh_current_types();
    let present: Vec<&str> = classifier.current_types().iter().map(|t| t.name()).collect();
    println!("Chart types present: {}", present.join(", "));

    let scales = build_scales(&store, &config);
    let engine = GeometryEngine::new(&classifier, &scales, &config, &store);
    let families = engine.shape_families();
    let mut scene = Scene::new();

    let y_of = engine.shape_y(false);
    let baseline_px = |id: &str| engine.y_scale(id, false).apply(engine.shape_y_min(id));

    // Bars
    if let Some(indices) = &families.bar {
        let width = bar_slot_width(&store, indices.max() + 1);
        let offset = BarOffset::Width(width);
        let x_of = engine.shape_x(&offset, indices, false);
        let stack_of = engine.shape_offset(|s| classifier.is_bar_type(s), indices, false);

        for (k, s) in store.visible().enumerate().filter(|(_, s)| classifier.is_bar_type(*s)) {
            println!("\n[{}] bar, slot {}", s.id, indices.ordinal(&s.id));
            for (i, d) in s.values.iter().enumerate() {
                let left = x_of(d);
                let stack = stack_of(d, i);
                let top = y_of(d) - (baseline_px(&d.id) - stack);
                let rect = Rect::from_corners(Point::new(left, top), Point::new(left + width, stack));
                println!(
                    "  #{i:<3} value {:>8} -> x {:>8.2} w {:>6.2} y {:>8.2}..{:>8.2}",
                    fmt_value(d.value.map(|v| v.number())),
                    rect.left,
                    rect.width(),
                    rect.top,
                    rect.bottom
                );
                scene.add_bar(rect, palette(k));
            }
        }
    }

    // Lines and areas
    if let Some(indices) = &families.line {
        let x_scale = scales.x(false);
        let area_stack = families
            .area
            .as_ref()
            .map(|area| engine.shape_offset(|s| classifier.is_area_type(s), area, false));

        for (k, s) in store.visible().enumerate().filter(|(_, s)| classifier.is_line_type(*s)) {
            let curve = s.values.first().map(|d| engine.interpolation(d)).unwrap_or_default();
            let points: Vec<Option<(f64, f64)>> = s
                .values
                .iter()
                .enumerate()
                .map(|(i, d)| {
                    let x = d.x.filter(|_| d.value.is_some())?;
                    let mut y = y_of(d);
                    if let (Some(stack), true) = (&area_stack, classifier.is_area_type(s)) {
                        y -= baseline_px(&d.id) - stack(d, i);
                    }
                    Some((x_scale.apply(x), y))
                })
                .collect();

            let ty = classifier.type_of(s);
            println!("\n[{}] {} (slot {}), curve {}", s.id, ty, indices.ordinal(&s.id), curve);
            for (i, p) in points.iter().enumerate() {
                match p {
                    Some((x, y)) => println!("  #{i:<3} -> ({x:.2}, {y:.2})"),
                    None => println!("  #{i:<3} -> gap"),
                }
            }
            println!("  path: {}", curve.path(points.iter().copied()));
            scene.add_line(curve_path(curve, points), palette(k));
        }
    }

    if let Some(out) = out_png {
        let opts = RenderOptions { width: WIDTH, height: HEIGHT, ..Default::default() };
        scene.render_to_png(&opts, &out)?;
        println!("\nWrote {}", out.display());
    }

    Ok(())
}

/// X scale over every point's x; y scale over values (stacked sums for grouped series)
/// and always including 0.
fn build_scales(store: &SeriesStore, config: &ShapeConfig) -> AxisScales {
    let xs = store.visible().flat_map(|s| s.values.iter().filter_map(|d| d.x));
    let (x_min, x_max) = minmax(xs).unwrap_or((0.0, 1.0));
    // half a step of room on each side for bar groups
    let steps = distinct_x_count(store).max(1) as f64;
    let pad = (x_max - x_min) / steps / 2.0;
    let x = ContinuousScale::new_linear((x_min - pad, x_max + pad), (INSET, WIDTH as f64 - INSET));

    let (y_min, y_max) = if config.is_stack_normalized() {
        (0.0, 100.0)
    } else {
        // per-x sums of same-signed grouped values
        let mut stacks: HashMap<u64, (f64, f64)> = HashMap::new();
        let mut values = Vec::new();
        for s in store.visible() {
            let grouped = config.is_grouped(&s.id);
            for d in &s.values {
                let v = d.number();
                values.push(v);
                if let (true, Some(x)) = (grouped, d.x) {
                    let e = stacks.entry(x.to_bits()).or_default();
                    if v >= 0.0 { e.0 += v } else { e.1 += v }
                }
            }
        }
        let extremes = stacks.values().flat_map(|&(p, n)| [p, n]);
        let (lo, hi) = minmax(values.into_iter().chain(extremes)).unwrap_or((0.0, 1.0));
        (lo.min(0.0), hi.max(0.0) * 1.1)
    };
    let y = ContinuousScale::new_linear((y_min, y_max), (HEIGHT as f64 - INSET, INSET));

    AxisScales::new(x, y)
}

fn bar_slot_width(store: &SeriesStore, slots: usize) -> f64 {
    let plot = WIDTH as f64 - 2.0 * INSET;
    plot / distinct_x_count(store).max(1) as f64 * BAR_RATIO / slots.max(1) as f64
}

fn distinct_x_count(store: &SeriesStore) -> usize {
    let mut seen: Vec<u64> = store
        .visible()
        .flat_map(|s| s.values.iter().filter_map(|d| d.x.map(f64::to_bits)))
        .collect();
    seen.sort_unstable();
    seen.dedup();
    seen.len()
}

fn minmax(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

fn fmt_value(v: Option<f64>) -> String {
    v.map(|v| format!("{v}")).unwrap_or_else(|| "-".to_string())
}
