// Copyright 2025 the Frontier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage: pack a dataset, compute its skyline, and inspect the result.
//!
//! Run with `RUST_LOG=debug` to see the engine's traversal statistics.

use frontier_index::{Entry, Point2D, StrTreeF64};
use frontier_skyline::Skyline;

struct Rng(u64);

impl Rng {
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

fn main() {
    env_logger::init();

    let mut rng = Rng(0xCAFE_F00D_DEAD_BEEF);
    let entries: Vec<Entry<f64, u32>> = (0..10_000_u32)
        .map(|i| {
            let x = rng.next_f64() * 100.0;
            let y = rng.next_f64() * 100.0;
            Entry::new(i, Point2D::new(x, y))
        })
        .collect();

    let tree = StrTreeF64::bulk_load(entries);
    log::info!("packed {} entries", tree.len());

    let skyline = Skyline::compute(&tree);
    println!(
        "skyline of {} points has {} members:",
        tree.len(),
        skyline.len()
    );
    let mut members: Vec<_> = skyline.iter().collect();
    members.sort_by(|a, b| a.point.x.total_cmp(&b.point.x));
    for m in members {
        println!("  #{:<6} ({:8.3}, {:8.3})", m.key, m.point.x, m.point.y);
    }
}
