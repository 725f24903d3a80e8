//! Criterion benchmarks for the digging engine.
//! Sizes: n in {1k, 5k, 20k} points on a jittered disc.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use concave::api::{
    dig_hull, jittered_disc, Circumradius, DelaunayTriangulation, DigCfg, EdgeLength, ReplayToken,
};
use concave::point::dedup_sorted;
use geo_types::{coord, Coord};

fn disc(n: usize, seed: u64) -> Vec<Coord<f64>> {
    // spacing chosen so the disc of radius 1 holds about n grid points
    let spacing = (std::f64::consts::PI / n as f64).sqrt();
    let mut rng = ReplayToken { seed, index: 0 }.rng();
    let mut pts = jittered_disc(coord! { x: 0.0, y: 0.0 }, 1.0, spacing, 0.3, &mut rng);
    dedup_sorted(&mut pts);
    pts
}

fn bench_dig(c: &mut Criterion) {
    let mut group = c.benchmark_group("dig");
    for &n in &[1_000usize, 5_000, 20_000] {
        let pts = disc(n, 7);
        group.bench_with_input(BenchmarkId::new("triangulate", n), &pts, |b, pts| {
            b.iter(|| DelaunayTriangulation::triangulate(pts))
        });

        let tri = DelaunayTriangulation::triangulate(&pts);
        let spacing = (std::f64::consts::PI / n as f64).sqrt();
        group.bench_with_input(BenchmarkId::new("circumradius_multi", n), &tri, |b, tri| {
            b.iter_batched(
                || Circumradius::new(2.0 * spacing),
                |crit| {
                    let _parts = dig_hull(tri, &crit, DigCfg::multi_part()).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("edge_length_single", n), &tri, |b, tri| {
            b.iter(|| {
                let _parts = dig_hull(tri, &EdgeLength::new(3.0 * spacing), DigCfg::default()).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dig);
criterion_main!(benches);
