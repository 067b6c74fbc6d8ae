// Copyright 2025 the Frontier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental maintenance: compute once, then fold single insertions and
//! deletions into the skyline without recomputing.

use frontier_index::{Entry, Point2D, StrTreeF64};
use frontier_skyline::{Maintainer, Skyline};

const UNIVERSE: f64 = 100.0;

fn print_skyline(label: &str, skyline: &Skyline<f64, u32>) {
    let mut members: Vec<_> = skyline.iter().collect();
    members.sort_by(|a, b| a.point.x.total_cmp(&b.point.x));
    println!("{label}:");
    for m in members {
        println!("  #{} ({}, {})", m.key, m.point.x, m.point.y);
    }
}

fn main() {
    env_logger::init();

    let mut tree = StrTreeF64::bulk_load(vec![
        Entry::new(1, Point2D::new(1.0, 5.0)),
        Entry::new(2, Point2D::new(2.0, 3.0)),
        Entry::new(3, Point2D::new(4.0, 1.0)),
        Entry::new(4, Point2D::new(3.0, 3.0)),
        Entry::new(5, Point2D::new(5.0, 5.0)),
    ]);
    let mut skyline = Skyline::compute(&tree);
    let maintainer = Maintainer::new(UNIVERSE);
    print_skyline("initial skyline", &skyline);

    // A new point that supersedes (2.0, 3.0).
    let fresh = Entry::new(6, Point2D::new(1.5, 2.0));
    tree = tree.with_entry(fresh);
    let admitted = maintainer.insert(&mut skyline, fresh);
    println!("\ninserted #{} (admitted: {admitted})", fresh.key);
    print_skyline("after insert", &skyline);

    // Remove it again; the superseded point resurfaces from the tree.
    tree = tree.without_entry(&fresh);
    let recovered = maintainer
        .delete(&mut skyline, &fresh, &tree)
        .expect("fresh entry is a member");
    println!("\ndeleted #{} (recovered {} hidden entries)", fresh.key, recovered);
    print_skyline("after delete", &skyline);
}
