// Copyright 2025 the Frontier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use frontier_index::{Aabb2D, Entry, Point2D, StrTreeF64};
use frontier_skyline::{Skyline, dominates};

use rstar::{AABB, RTree};

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

fn gen_points(count: usize, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| [rng.next_f64() * UNIVERSE, rng.next_f64() * UNIVERSE])
        .collect()
}

fn to_entries(points: &[[f64; 2]]) -> Vec<Entry<f64, u32>> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| Entry::new(i as u32, Point2D::new(p[0], p[1])))
        .collect()
}

fn bench_range_query_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_query_external_compare");
    for &n in &[4096_usize, 16384] {
        let points = gen_points(n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("frontier_build_query_n{}", n), |b| {
            b.iter_batched(
                || to_entries(&points),
                |entries| {
                    let tree = StrTreeF64::bulk_load(entries);
                    let rect = Aabb2D::new(100.0, 100.0, 500.0, 500.0);
                    let hits: usize = tree.search(&rect).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let tree = RTree::bulk_load(points);
                    let envelope = AABB::from_corners([100.0, 100.0], [500.0, 500.0]);
                    let hits: usize = tree.locate_in_envelope(&envelope).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

/// Baseline: a full dominance scan over an rstar bulk-loaded tree, against
/// the branch-and-bound engine on the same data.
fn bench_skyline_vs_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("skyline_external_compare");
    for &n in &[1024_usize, 2048] {
        let points = gen_points(n, 0xBADC_F00D_1234_5678);
        group.throughput(Throughput::Elements(n as u64));

        let tree = StrTreeF64::bulk_load(to_entries(&points));
        group.bench_function(format!("frontier_bbs_n{}", n), |b| {
            b.iter(|| {
                black_box(Skyline::compute(black_box(&tree)).len());
            })
        });

        let rstar_tree = RTree::bulk_load(points.clone());
        group.bench_function(format!("rstar_full_scan_n{}", n), |b| {
            b.iter(|| {
                let count = rstar_tree
                    .iter()
                    .filter(|p| {
                        !rstar_tree.iter().any(|o| {
                            dominates(Point2D::new(o[0], o[1]), Point2D::new(p[0], p[1]))
                        })
                    })
                    .count();
                black_box(count);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_range_query_compare, bench_skyline_vs_scan);
criterion_main!(benches);
