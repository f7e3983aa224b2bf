//! Benchmarks comparing checked and unchecked reductions, and the transforms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use na_algorithm::{prod, prod_nona, sum, sum_nona, NaSliceExt, RealFn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate reproducible real test data in (0, 2)
fn generate_reals(size: usize) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..size).map(|_| rng.gen_range(0.0..2.0) + f64::EPSILON).collect()
}

/// Generate reproducible small integers that cannot overflow a sum
fn generate_ints(size: usize) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    (0..size).map(|_| rng.gen_range(-100..100)).collect()
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");

    for &size in &[1_000, 10_000, 100_000] {
        let reals = generate_reals(size);
        let ints = generate_ints(size);

        group.bench_with_input(BenchmarkId::new("real_checked", size), &reals, |b, data| {
            b.iter(|| sum(black_box(data).iter().copied()))
        });
        group.bench_with_input(BenchmarkId::new("real_nona", size), &reals, |b, data| {
            b.iter(|| sum_nona(black_box(data).iter().copied()))
        });
        group.bench_with_input(BenchmarkId::new("int_checked", size), &ints, |b, data| {
            b.iter(|| sum(black_box(data).iter().copied()))
        });
        group.bench_with_input(BenchmarkId::new("int_nona", size), &ints, |b, data| {
            b.iter(|| sum_nona(black_box(data).iter().copied()))
        });
    }

    group.finish();
}

fn bench_prod(c: &mut Criterion) {
    let mut group = c.benchmark_group("prod");

    for &size in &[1_000, 10_000, 100_000] {
        let reals = generate_reals(size);

        group.bench_with_input(BenchmarkId::new("real_checked", size), &reals, |b, data| {
            b.iter(|| prod(black_box(data).iter().copied()))
        });
        group.bench_with_input(BenchmarkId::new("real_nona", size), &reals, |b, data| {
            b.iter(|| prod_nona(black_box(data).iter().copied()))
        });
    }

    group.finish();
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let data = generate_reals(10_000);

    for func in [RealFn::Log, RealFn::Exp, RealFn::Sqrt] {
        group.bench_with_input(BenchmarkId::new(func.name(), data.len()), &data, |b, data| {
            b.iter(|| black_box(data).na_apply(func))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sum, bench_prod, bench_transforms);
criterion_main!(benches);
