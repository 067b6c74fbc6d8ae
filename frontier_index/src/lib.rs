// Copyright 2025 the Frontier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=frontier_index --heading-base-level=0

//! Frontier Index: a packed 2D point tree with value semantics.
//!
//! Frontier Index stores keyed points ([`Entry`]) in a Sort-Tile-Recursive
//! packed tree and answers rectangular range queries over them. It is the
//! storage side of the Frontier workspace; query layers traverse it through
//! read-only node views.
//!
//! - Build with [`StrTree::bulk_load`]; add or drop one entry with
//!   [`StrTree::with_entry`] / [`StrTree::without_entry`], each of which
//!   returns a **new** tree value and leaves the receiver intact. Snapshots
//!   stay valid while the caller swaps in updated trees.
//! - Query with [`StrTree::search`], a lazy iterator that prunes subtrees by
//!   MBR, or walk the structure yourself from [`StrTree::root`] via
//!   [`NodeRef`] and the [`NodeContents`] variants.
//! - Generic over the coordinate scalar `T` ([`Scalar`]: `f32`, `f64`,
//!   `i64`) and the entry key `P`.
//!
//! There is no dynamic node splitting or rebalancing: every mutation packs
//! the full entry set again. That keeps the structure simple and makes the
//! snapshot guarantee cheap; it is the right trade for read-heavy workloads
//! with occasional single-entry updates.
//!
//! # Example
//!
//! ```rust
//! use frontier_index::{Aabb2D, Entry, Point2D, StrTreeF64};
//!
//! let tree = StrTreeF64::bulk_load(vec![
//!     Entry::new(1_u32, Point2D::new(1.0, 5.0)),
//!     Entry::new(2, Point2D::new(2.0, 3.0)),
//!     Entry::new(3, Point2D::new(4.0, 1.0)),
//! ]);
//!
//! let hits: Vec<_> = tree.search(&Aabb2D::new(0.0, 0.0, 3.0, 6.0)).collect();
//! assert_eq!(hits.len(), 2);
//!
//! // Value semantics: the original tree still sees the old contents.
//! let shrunk = tree.without_entry(&Entry::new(2, Point2D::new(2.0, 3.0)));
//! assert_eq!(tree.len(), 3);
//! assert_eq!(shrunk.len(), 2);
//! ```
//!
//! ## Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. Comparisons
//! that do meet NaN treat the operands as equal, matching the packing sorts.

#![no_std]

extern crate alloc;

pub mod entry;
pub mod geometry;
pub mod node;
pub mod tree;

pub use entry::Entry;
pub use geometry::{Aabb2D, Point2D, Scalar};
pub use node::{Children, NodeContents, NodeRef};
pub use tree::{RangeQuery, StrTree, StrTreeF32, StrTreeF64, StrTreeI64};
