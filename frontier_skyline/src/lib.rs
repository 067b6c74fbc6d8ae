// Copyright 2025 the Frontier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=frontier_skyline --heading-base-level=0

//! Frontier Skyline: branch-and-bound skyline queries with incremental
//! maintenance.
//!
//! The skyline (Pareto-minimal set) of a 2D dataset holds every point no
//! other point [`dominates`]: no other point is at least as small on both
//! axes and strictly smaller on one. This crate computes skylines over a
//! [`frontier_index::StrTree`] and keeps them current as single entries come
//! and go, without recomputing from scratch.
//!
//! - [`Skyline::compute`] runs a best-first branch-and-bound traversal that
//!   expands subtrees in ascending `mindist` order and prunes any subtree
//!   whose MBR lower-left corner is already dominated.
//! - [`Maintainer::insert`] folds one new entry into a computed skyline with
//!   a single member scan and no tree access.
//! - [`Maintainer::delete`] removes one member and recovers the entries it
//!   alone was hiding, by re-running the engine over the rectangle the
//!   member's sorted neighbours bound.
//!
//! All operations are synchronous and CPU-bound; the caller owns the set and
//! serializes updates. The tree is a value, so an update never invalidates a
//! snapshot someone else is still traversing.
//!
//! # Example
//!
//! ```rust
//! use frontier_index::{Entry, Point2D, StrTreeF64};
//! use frontier_skyline::{Maintainer, Skyline};
//!
//! let tree = StrTreeF64::bulk_load(vec![
//!     Entry::new(1_u32, Point2D::new(1.0, 5.0)),
//!     Entry::new(2, Point2D::new(2.0, 3.0)),
//!     Entry::new(3, Point2D::new(4.0, 1.0)),
//!     Entry::new(4, Point2D::new(3.0, 3.0)),
//!     Entry::new(5, Point2D::new(5.0, 5.0)),
//! ]);
//! let mut skyline = Skyline::compute(&tree);
//! assert_eq!(skyline.len(), 3);
//!
//! // Fold in a new point without recomputing; it evicts (2.0, 3.0).
//! let f = Entry::new(6, Point2D::new(1.5, 2.0));
//! let tree = tree.with_entry(f);
//! let maintainer = Maintainer::new(100.0);
//! assert!(maintainer.insert(&mut skyline, f));
//! assert_eq!(skyline.len(), 3);
//!
//! // Remove it again; the evicted point comes back.
//! let tree = tree.without_entry(&f);
//! maintainer.delete(&mut skyline, &f, &tree).unwrap();
//! assert_eq!(skyline.len(), 3);
//! ```
//!
//! ## Float semantics
//!
//! NaN coordinates are unsupported, matching `frontier_index`. Callers
//! validate geometry before indexing.

#![no_std]

extern crate alloc;

pub mod bbs;
pub mod dominance;
pub mod maintain;
pub mod skyline;

pub use dominance::dominates;
pub use maintain::{MaintainError, Maintainer};
pub use skyline::Skyline;
