use chart_shape::{
    AxisScales, ChartType, Classifier, ContinuousScale, GeometryEngine, Series, SeriesStore, ShapeConfig,
};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_store(series: usize, points: usize) -> SeriesStore {
    let mut all = Vec::with_capacity(series);
    for s in 0..series {
        let data: Vec<(f64, f64)> = (0..points)
            .map(|i| {
                let x = i as f64;
                // mixed signs so the same-sign check does real work
                (x, ((i + s) as f64 * 0.05).sin() * 10.0)
            })
            .collect();
        all.push(Series::with_data(format!("s{s}"), &data));
    }
    SeriesStore::new(all)
}

fn bench_offsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_offset");
    for &(series, points) in &[(4usize, 1_000usize), (8usize, 5_000usize)] {
        let store = build_store(series, points);
        let ids: Vec<String> = store.ids().map(str::to_string).collect();

        let mut classifier = Classifier::new();
        classifier.set_targets(ids.clone());
        classifier.assign_type(&[], ChartType::Bar);

        let cfg = ShapeConfig { data_groups: vec![ids], ..Default::default() };
        let scales = AxisScales::new(
            ContinuousScale::new_linear((0.0, points as f64), (0.0, 800.0)),
            ContinuousScale::new_linear((-100.0, 100.0), (500.0, 0.0)),
        );
        let engine = GeometryEngine::new(&classifier, &scales, &cfg, &store);
        let indices = engine.shape_indices(|s| classifier.is_bar_type(s));

        group.bench_function(format!("s{series}_p{points}"), |b| {
            b.iter(|| {
                let offset = engine.shape_offset(|s| classifier.is_bar_type(s), &indices, false);
                let mut acc = 0.0;
                for s in store.all() {
                    for (i, d) in s.values.iter().enumerate() {
                        acc += offset(d, i);
                    }
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_offsets);
criterion_main!(benches);
