//! Criterion benchmarks for map construction.

use criterion::{criterion_group, criterion_main, Criterion};
use obstruct_bench::{banded_profile, dense_profile, sparse_profile};
use obstruct_space::Strategy;

/// Benchmark: Build both strategies for the sparse and dense profiles.
fn bench_build_small_profiles(c: &mut Criterion) {
    for (name, config) in [("sparse", sparse_profile(42)), ("dense", dense_profile(42))] {
        for strategy in [Strategy::LinearScan, Strategy::Indexed] {
            c.bench_function(&format!("build_{name}_{strategy}"), |b| {
                b.iter(|| {
                    let map = config.clone().with_strategy(strategy).build().unwrap();
                    std::hint::black_box(&map);
                });
            });
        }
    }
}

/// Benchmark: Index the banded profile (7.5M obstructed cells).
fn bench_build_banded_indexed(c: &mut Criterion) {
    let config = banded_profile().with_strategy(Strategy::Indexed);
    let mut group = c.benchmark_group("banded");
    group.sample_size(10);
    group.bench_function("build_banded_indexed", |b| {
        b.iter(|| {
            let map = config.clone().build().unwrap();
            std::hint::black_box(&map);
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build_small_profiles,
    bench_build_banded_indexed
);
criterion_main!(benches);
