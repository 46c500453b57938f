//! Benchmarks for view construction and traversal.
//!
//! Building a view is where the work happens: the sorted orders pay for a
//! stable sort, middle-out and insertion for a linear fill, reverse for
//! nothing. Walking is a revision check plus a clone per step.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use orderings::view::{Ascending, Cursor, Descending, Insertion, MiddleOut, Reverse, SideCross};
use orderings::{Store, Traversal};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

const SIZES: [usize; 3] = [16, 1_000, 100_000];

fn random_store(len: usize) -> Store<u64> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    return (0..len).map(|_| rng.gen_range(0..len as u64)).collect();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for len in SIZES {
        let store = random_store(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("ascending", len), &store, |b, s| {
            b.iter(|| black_box(Ascending::begin(s)))
        });
        group.bench_with_input(BenchmarkId::new("descending", len), &store, |b, s| {
            b.iter(|| black_box(Descending::begin(s)))
        });
        group.bench_with_input(BenchmarkId::new("side_cross", len), &store, |b, s| {
            b.iter(|| black_box(SideCross::begin(s)))
        });
        group.bench_with_input(BenchmarkId::new("middle_out", len), &store, |b, s| {
            b.iter(|| black_box(MiddleOut::begin(s)))
        });
        group.bench_with_input(BenchmarkId::new("insertion", len), &store, |b, s| {
            b.iter(|| black_box(Insertion::begin(s)))
        });
        group.bench_with_input(BenchmarkId::new("reverse", len), &store, |b, s| {
            b.iter(|| black_box(Reverse::begin(s)))
        });
    }
    group.finish();
}

fn bench_collect(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect");
    let len = 1_000;
    let store = random_store(len);
    group.throughput(Throughput::Elements(len as u64));
    for order in Traversal::ALL {
        group.bench_with_input(BenchmarkId::new(order.to_string(), len), &order, |b, &order| {
            b.iter(|| black_box(store.collect(order)))
        });
    }
    group.finish();
}

criterion_group! {
    name = view_benches;
    config = Criterion::default().configure_from_args();
    targets = bench_build, bench_collect,
}
criterion_main!(view_benches);
