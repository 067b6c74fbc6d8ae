// Copyright 2025 the Frontier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use frontier_index::{Entry, Point2D, StrTreeF64};
use frontier_skyline::{Maintainer, Skyline};

const UNIVERSE: f64 = 2000.0;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_uniform_entries(count: usize, seed: u64) -> Vec<Entry<f64, u32>> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|i| {
            let x = rng.next_f64() * UNIVERSE;
            let y = rng.next_f64() * UNIVERSE;
            Entry::new(i as u32, Point2D::new(x, y))
        })
        .collect()
}

/// Points near the anti-diagonal: many are mutually incomparable, so the
/// skyline stays large and pruning earns less.
fn gen_anticorrelated_entries(count: usize, seed: u64) -> Vec<Entry<f64, u32>> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|i| {
            let t = rng.next_f64();
            let jitter = (rng.next_f64() - 0.5) * UNIVERSE * 0.05;
            let x = t * UNIVERSE;
            let y = ((1.0 - t) * UNIVERSE + jitter).clamp(0.0, UNIVERSE);
            Entry::new(i as u32, Point2D::new(x, y))
        })
        .collect()
}

fn bench_compute_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_uniform");
    for &n in &[1024_usize, 4096, 16384] {
        let entries = gen_uniform_entries(n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("bulk_then_compute_n{}", n), |b| {
            b.iter_batched(
                || entries.clone(),
                |entries| {
                    let tree = StrTreeF64::bulk_load(entries);
                    let skyline = Skyline::compute(&tree);
                    black_box(skyline.len());
                },
                BatchSize::SmallInput,
            )
        });
        let tree = StrTreeF64::bulk_load(entries);
        group.bench_function(format!("compute_only_n{}", n), |b| {
            b.iter(|| {
                let skyline = Skyline::compute(black_box(&tree));
                black_box(skyline.len());
            })
        });
    }
    group.finish();
}

fn bench_compute_anticorrelated(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_anticorrelated");
    for &n in &[1024_usize, 4096] {
        let entries = gen_anticorrelated_entries(n, 0xBADC_F00D_1234_5678);
        let tree = StrTreeF64::bulk_load(entries);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("compute_only_n{}", n), |b| {
            b.iter(|| {
                let skyline = Skyline::compute(black_box(&tree));
                black_box(skyline.len());
            })
        });
    }
    group.finish();
}

fn bench_insert_maintained_vs_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_one");
    let entries = gen_uniform_entries(4096, 0xFACE_FEED_CAFE_BABE);
    let tree = StrTreeF64::bulk_load(entries);
    let skyline = Skyline::compute(&tree);
    let maintainer = Maintainer::new(UNIVERSE);
    let fresh = Entry::new(100_000, Point2D::new(3.0, 4.0));

    group.bench_function("maintained", |b| {
        b.iter_batched(
            || skyline.clone(),
            |mut skyline| {
                black_box(maintainer.insert(&mut skyline, fresh));
                black_box(skyline.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("recompute", |b| {
        b.iter_batched(
            || tree.clone(),
            |tree| {
                let grown = tree.with_entry(fresh);
                black_box(Skyline::compute(&grown).len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_delete_maintained_vs_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_one");
    let entries = gen_uniform_entries(4096, 0xC1A5_7E55_9999_ABCD);
    let tree = StrTreeF64::bulk_load(entries);
    let skyline = Skyline::compute(&tree);
    let maintainer = Maintainer::new(UNIVERSE);
    let victim = skyline.members()[skyline.len() / 2];
    let shrunk = tree.without_entry(&victim);

    group.bench_function("maintained", |b| {
        b.iter_batched(
            || skyline.clone(),
            |mut skyline| {
                let recovered = maintainer
                    .delete(&mut skyline, &victim, &shrunk)
                    .expect("victim is a member");
                black_box(recovered);
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("recompute", |b| {
        b.iter(|| {
            black_box(Skyline::compute(black_box(&shrunk)).len());
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_compute_uniform,
    bench_compute_anticorrelated,
    bench_insert_maintained_vs_recompute,
    bench_delete_maintained_vs_recompute,
);
criterion_main!(benches);
