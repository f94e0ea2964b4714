//! Criterion benchmarks for hull construction.
//! Focus sizes: n in {64, 512, 4096, 32768}.
//! Results live under target/criterion by default.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use mergehull::cloud::{draw_point_cloud, CloudCfg, ReplayToken, Window};
use mergehull::hull::{convex_hull, hull_of_sorted, prepare_points, Point};

fn cloud(count: usize, seed: u64) -> Vec<Point> {
    let cfg = CloudCfg {
        count,
        window: Window::default(),
    };
    draw_point_cloud(cfg, ReplayToken { seed, index: 0 })
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[64usize, 512, 4096, 32768] {
        group.bench_with_input(BenchmarkId::new("convex_hull", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 43),
                |pts| {
                    let _hull = convex_hull(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        // Merge phase alone, on pre-sorted input.
        group.bench_with_input(BenchmarkId::new("hull_of_sorted", n), &n, |b, &n| {
            b.iter_batched(
                || prepare_points(&cloud(n, 44)).unwrap(),
                |pts| {
                    let _hull = hull_of_sorted(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
