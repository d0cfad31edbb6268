//! Criterion microbenches for enumeration and its hot paths.
//!
//! - Full enumeration for n = 4, 5.
//! - Signature and equivalence on a walked n = 8 rectangulation.
//! - Split-point search on a thin full-width pair.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::vector;
use rectflip::enumerate::{enumerate, EnumerateCfg};
use rectflip::geom::{Axis, RectCfg};
use rectflip::split::find_spot;
use rectflip::walk::{FlipWalker, WalkParams};

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate");
    group.sample_size(10);
    for n in [4usize, 5] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| enumerate(n, EnumerateCfg::default()).unwrap())
        });
    }
    group.finish();
}

fn bench_hot_paths(c: &mut Criterion) {
    let cfg = RectCfg::default();
    let params = WalkParams { n: 8, steps: 40 };
    let a = FlipWalker::walk_single(&params, 1, &cfg).unwrap().end;
    let b = FlipWalker::walk_single(&params, 2, &cfg).unwrap().end;
    let mut group = c.benchmark_group("hot");
    group.bench_function(BenchmarkId::new("signature", "n8"), |bch| {
        bch.iter(|| a.signature(&cfg))
    });
    group.bench_function(BenchmarkId::new("equivalent", "n8"), |bch| {
        bch.iter(|| a.equivalent(&b, &cfg))
    });
    group.bench_function(BenchmarkId::new("find_spot", "thin"), |bch| {
        bch.iter(|| {
            find_spot(
                50.0,
                vector![0.0, 37.5],
                vector![100.0, 50.0],
                Axis::Horizontal,
                &cfg,
            )
            .unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_enumerate, bench_hot_paths);
criterion_main!(benches);
