//! Criterion benchmarks for polygon editing and queries.
//! Focus sizes: n in {4, 16, 64, 256}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::polygon::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use planar::polygon::Polygon;
use planar::Point;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn ring_vertices(n: usize, seed: u64) -> Vec<Point> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    let poly = draw_polygon_radial(cfg, ReplayToken { seed, index: 0 });
    poly.vertices().to_vec()
}

fn bench_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    for &n in &[4usize, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("insert_close", n), &n, |b, &n| {
            b.iter_batched(
                || ring_vertices(n, 43),
                |verts| {
                    let first = verts[0];
                    let mut poly = Polygon::new();
                    for v in verts {
                        poly.insert(v);
                    }
                    let _res = poly.insert(first);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("contains", n), &n, |b, &n| {
            let cfg = RadialCfg {
                vertex_count: VertexCount::Fixed(n),
                ..RadialCfg::default()
            };
            let poly = draw_polygon_radial(cfg, ReplayToken { seed: 44, index: 0 });
            let mut rng = StdRng::seed_from_u64(45);
            b.iter_batched(
                || Point::new(rng.gen_range(-1.5..1.5), rng.gen_range(-1.5..1.5)),
                |p| {
                    let _res = poly.contains(p);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("replace_vertex", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(46);
            b.iter_batched(
                || {
                    let cfg = RadialCfg {
                        vertex_count: VertexCount::Fixed(n),
                        ..RadialCfg::default()
                    };
                    let poly = draw_polygon_radial(cfg, ReplayToken { seed: 47, index: 0 });
                    let index = rng.gen_range(0..n);
                    let jitter = Point::new(rng.gen_range(-0.1..0.1), rng.gen_range(-0.1..0.1));
                    (poly, index, jitter)
                },
                |(mut poly, index, jitter)| {
                    let target = poly.vertices()[index];
                    let moved = Point::new(target.x() + jitter.x(), target.y() + jitter.y());
                    let _res = poly.replace(index, moved);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_polygon);
criterion_main!(benches);
