// Copyright 2025 the Frontier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The skyline set: an antichain of entries under dominance.

use alloc::vec::Vec;
use core::fmt::Debug;

use frontier_index::{Entry, Point2D, Scalar};

use crate::dominance::dominates;

/// The set of entries none of which dominates another.
///
/// Produced from a full tree by [`Skyline::compute`] and kept current by a
/// [`Maintainer`](crate::Maintainer) as single entries come and go. The set
/// is semantically unordered; member order is unspecified and may change
/// across maintenance calls. The caller owns the set and must apply updates
/// one at a time.
#[derive(Clone, Debug)]
pub struct Skyline<T: Scalar, P: Copy + Debug> {
    pub(crate) members: Vec<Entry<T, P>>,
}

impl<T: Scalar, P: Copy + Debug> Default for Skyline<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, P: Copy + Debug> Skyline<T, P> {
    /// The empty skyline.
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the skyline has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The members, in unspecified order.
    pub fn members(&self) -> &[Entry<T, P>] {
        &self.members
    }

    /// Iterate the members.
    pub fn iter(&self) -> core::slice::Iter<'_, Entry<T, P>> {
        self.members.iter()
    }

    /// Whether any member dominates `p`.
    pub fn dominates(&self, p: Point2D<T>) -> bool {
        self.members.iter().any(|m| dominates(m.point, p))
    }

    /// Whether a structurally equal entry (key and point) is a member.
    pub fn contains(&self, entry: &Entry<T, P>) -> bool
    where
        P: PartialEq,
    {
        self.members.iter().any(|m| m == entry)
    }

    /// Admit an entry the caller has already checked against the set.
    pub(crate) fn push(&mut self, entry: Entry<T, P>) {
        debug_assert!(
            !self.dominates(entry.point),
            "admitted entry must not be dominated"
        );
        self.members.push(entry);
    }
}

impl<T: Scalar, P: Copy + Debug> IntoIterator for Skyline<T, P> {
    type Item = Entry<T, P>;
    type IntoIter = alloc::vec::IntoIter<Entry<T, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a, T: Scalar, P: Copy + Debug> IntoIterator for &'a Skyline<T, P> {
    type Item = &'a Entry<T, P>;
    type IntoIter = core::slice::Iter<'a, Entry<T, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
