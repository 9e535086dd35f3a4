use criterion::{criterion_group, criterion_main, Criterion};
use nestcut_core::{build_nests, build_spline, sample_at, Point};
use std::hint::black_box;

fn blob_polygon(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * std::f64::consts::TAU;
            let radius = 4.0 + (i % 3) as f64 * 0.4;
            Point::new(5.0 + radius * angle.cos(), 5.0 + radius * angle.sin())
        })
        .collect()
}

fn bench_spline(c: &mut Criterion) {
    let points = blob_polygon(12);
    c.bench_function("build_spline_12pt", |b| {
        b.iter(|| black_box(build_spline(black_box(&points))))
    });
}

fn bench_nests(c: &mut Criterion) {
    let curve = build_spline(&blob_polygon(12));
    let convergence = Point::new(5.0, 5.0);
    c.bench_function("build_nests_0_9", |b| {
        b.iter(|| {
            black_box(build_nests(
                black_box(&curve),
                convergence,
                0.9,
                0.9,
                0.25,
            ))
        })
    });
}

fn bench_sampler(c: &mut Criterion) {
    let curve = build_spline(&blob_polygon(12));
    c.bench_function("sample_at_sweep", |b| {
        b.iter(|| {
            for i in 0..32 {
                let s = i as f64 / 32.0;
                black_box(sample_at(black_box(&curve), s));
            }
        })
    });
}

criterion_group!(benches, bench_spline, bench_nests, bench_sampler);
criterion_main!(benches);
