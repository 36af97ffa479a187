//! Criterion benchmarks for the TSP branch-and-bound solver.
//!
//! Uses seeded random asymmetric instances so that every run explores
//! the same search tree.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_tsp_bnb::bnb::{BnbConfig, BnbRunner};
use u_tsp_bnb::greedy::GreedyRunner;
use u_tsp_bnb::matrix::{CostMatrix, PlanarCity};

// ===========================================================================
// Instances
// ===========================================================================

/// Cities scattered on a 1000×1000 map with random elevations; about one
/// edge in ten is missing.
fn random_instance(n: usize, seed: u64) -> CostMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let cities: Vec<PlanarCity> = (0..n)
        .map(|_| {
            PlanarCity::new(
                rng.random_range(0.0..1000.0),
                rng.random_range(0.0..1000.0),
                rng.random_range(0.0..50.0),
            )
        })
        .collect();
    let edges: Vec<bool> = (0..n * n).map(|_| rng.random_bool(0.9)).collect();
    CostMatrix::from_cities(&cities, |i, j| edges[i * n + j]).expect("planar costs are valid")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");

    for &n in &[10, 50, 200] {
        let matrix = random_instance(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, m| {
            b.iter(|| {
                let mut copy = m.clone();
                black_box(copy.reduce())
            })
        });
    }
    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");

    for &n in &[10, 50, 200] {
        let matrix = random_instance(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, m| {
            b.iter(|| black_box(GreedyRunner::run(black_box(m))))
        });
    }
    group.finish();
}

fn bench_bnb(c: &mut Criterion) {
    let mut group = c.benchmark_group("bnb");
    group.sample_size(10);

    for &n in &[8, 12, 15] {
        let matrix = random_instance(n, 7);
        let config = BnbConfig::default().with_time_limit(Duration::from_secs(5));
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(matrix, config),
            |b, (m, cfg)| {
                b.iter(|| {
                    let result = BnbRunner::run(black_box(m), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_reduce, bench_greedy, bench_bnb);
criterion_main!(benches);
