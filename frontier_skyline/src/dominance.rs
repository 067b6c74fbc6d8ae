// Copyright 2025 the Frontier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dominance relation underlying every skyline decision.

use frontier_index::{Point2D, Scalar};

/// Whether `a` dominates `b`, minimizing on both axes.
///
/// `a` dominates `b` when it is no worse on either coordinate and strictly
/// better on at least one. The relation is a strict partial order: it is
/// irreflexive, so coincident points do not dominate each other and
/// duplicates of a minimal point can coexist in a skyline.
///
/// NaN coordinates are unsupported; comparisons against NaN are false, which
/// leaves such points both undominated and non-dominating.
#[inline]
pub fn dominates<T: Scalar>(a: Point2D<T>, b: Point2D<T>) -> bool {
    a.x <= b.x && a.y <= b.y && (a.x < b.x || a.y < b.y)
}
