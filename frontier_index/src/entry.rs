// Copyright 2025 the Frontier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed point entries stored by the tree.

use crate::geometry::Point2D;

/// A keyed point.
///
/// The key is an opaque caller-supplied identifier and carries the entry's
/// identity; the point carries its geometry. Structural equality requires
/// both to match.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Entry<T, P> {
    /// Opaque identifier supplied by the caller.
    pub key: P,
    /// Location of the entry.
    pub point: Point2D<T>,
}

impl<T, P> Entry<T, P> {
    /// Create an entry from a key and its location.
    pub const fn new(key: P, point: Point2D<T>) -> Self {
        Self { key, point }
    }
}
