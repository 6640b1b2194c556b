//! Skyline benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of each strategy on worst-case data (every point survives)
//! - Random data, where most points are eliminated early
//! - Worker count scaling for the parallel strategies
//! - Dimensionality
//! - The bare filter passes, without result assembly
//!
//! Select the strategy with `SKYLINE_BENCH_BACKEND=sequential|shared|distributed cargo bench`
//! (default: shared).

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastSkyline::internals::engine::distributed::filter_pass_distributed;
use fastSkyline::internals::engine::executor::filter_pass_shared;
use fastSkyline::prelude::*;
use rand::prelude::*;
use skyline::internals::algorithms::filter::skyline as sequential_kernel;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (Backend, &'static str) {
    match env::var("SKYLINE_BENCH_BACKEND").ok().as_deref() {
        Some("sequential") | Some("serial") => (Backend::Sequential, "sequential"),
        Some("distributed") => (Backend::Distributed, "distributed"),
        _ => (Backend::SharedMemory, "shared"),
    }
}

fn fit(points: &PointSet<f32>, backend: Backend, workers: usize) -> SkylineResult<f32> {
    match backend {
        Backend::Sequential => Skyline::new()
            .adapter(Sequential)
            .build()
            .unwrap()
            .fit(points)
            .unwrap(),
        Backend::SharedMemory => Skyline::new()
            .workers(workers)
            .adapter(SharedMemory)
            .build()
            .unwrap()
            .fit(points)
            .unwrap(),
        Backend::Distributed => Skyline::new()
            .workers(workers)
            .adapter(Distributed)
            .build()
            .unwrap()
            .fit(points)
            .unwrap(),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Points whose coordinates sum to 1000; no point dominates another.
fn generate_worst_case(size: usize, dims: usize, seed: u64) -> PointSet<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut coords = Vec::with_capacity(size * dims);
    for _ in 0..size {
        let mut remaining = 1000.0_f32;
        for _ in 1..dims {
            let v = rng.random_range(0.0..=remaining);
            coords.push(v);
            remaining -= v;
        }
        coords.push(remaining);
    }
    PointSet::from_flat(dims, coords).unwrap()
}

/// Uniform points in the unit hypercube.
fn generate_uniform(size: usize, dims: usize, seed: u64) -> PointSet<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let coords = (0..size * dims).map(|_| rng.random::<f32>()).collect();
    PointSet::from_flat(dims, coords).unwrap()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_worst_case(c: &mut Criterion) {
    let (backend, mode_name) = get_config();
    let workers = default_workers();
    let mut group = c.benchmark_group(format!("worst_case_{}", mode_name));
    group.sample_size(10);

    for size in [1_000, 2_000, 5_000] {
        group.throughput(Throughput::Elements(size as u64));
        let points = generate_worst_case(size, 3, 42);

        group.bench_with_input(BenchmarkId::new("d3", size), &size, |b, _| {
            b.iter(|| fit(black_box(&points), backend, workers))
        });
    }
    group.finish();
}

fn bench_uniform(c: &mut Criterion) {
    let (backend, mode_name) = get_config();
    let workers = default_workers();
    let mut group = c.benchmark_group(format!("uniform_{}", mode_name));
    group.sample_size(20);

    for size in [10_000, 50_000] {
        group.throughput(Throughput::Elements(size as u64));
        let points = generate_uniform(size, 4, 7);

        group.bench_with_input(BenchmarkId::new("d4", size), &size, |b, _| {
            b.iter(|| fit(black_box(&points), backend, workers))
        });
    }
    group.finish();
}

fn bench_workers(c: &mut Criterion) {
    let mut group = c.benchmark_group("workers");
    group.sample_size(10);
    let points = generate_worst_case(2_000, 3, 1);

    for workers in [1, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("shared", workers),
            &workers,
            |b, &workers| b.iter(|| fit(black_box(&points), Backend::SharedMemory, workers)),
        );
        group.bench_with_input(
            BenchmarkId::new("distributed", workers),
            &workers,
            |b, &workers| b.iter(|| fit(black_box(&points), Backend::Distributed, workers)),
        );
    }
    group.finish();
}

fn bench_dimensions(c: &mut Criterion) {
    let mut group = c.benchmark_group("dimensions_kernel");
    group.sample_size(10);

    for dims in [2, 5, 10, 20] {
        let points = generate_worst_case(1_000, dims, 3);
        group.bench_with_input(BenchmarkId::new("sequential", dims), &dims, |b, _| {
            b.iter(|| sequential_kernel(black_box(&points)).unwrap())
        });
    }
    group.finish();
}

fn bench_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("passes");
    group.sample_size(10);
    let points = generate_worst_case(2_000, 3, 5);
    let workers = default_workers();

    group.bench_function("sequential", |b| {
        b.iter(|| sequential_kernel(black_box(&points)).unwrap())
    });
    group.bench_function("shared", |b| {
        b.iter(|| filter_pass_shared(black_box(&points), workers).unwrap())
    });
    group.bench_function("distributed", |b| {
        b.iter(|| filter_pass_distributed(black_box(&points), workers).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_worst_case,
    bench_uniform,
    bench_workers,
    bench_dimensions,
    bench_passes
);
criterion_main!(benches);
