use chart_shape::{Series, ShapeConfig, ShapeIndices};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_series(n: usize) -> Vec<Series> {
    (0..n)
        .map(|i| Series::with_data(format!("s{i}"), &[(0.0, i as f64), (1.0, (i as f64 * 0.1).sin())]))
        .collect()
}

fn grouped_config(n: usize, group_size: usize) -> ShapeConfig {
    let ids: Vec<String> = (0..n).map(|i| format!("s{i}")).collect();
    ShapeConfig {
        data_groups: ids.chunks(group_size).map(|c| c.to_vec()).collect(),
        ..Default::default()
    }
}

fn bench_indices(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape_indices");
    for &n in &[16usize, 128usize, 512usize] {
        let series = gen_series(n);
        let flat = ShapeConfig::default();
        let grouped = grouped_config(n, 4);

        group.bench_with_input(BenchmarkId::new("flat", n), &series, |b, s| {
            b.iter(|| black_box(ShapeIndices::build(s, &flat)));
        });
        group.bench_with_input(BenchmarkId::new("grouped4", n), &series, |b, s| {
            b.iter(|| black_box(ShapeIndices::build(s, &grouped)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_indices);
criterion_main!(benches);
