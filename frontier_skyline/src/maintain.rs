// Copyright 2025 the Frontier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental skyline maintenance for single-entry updates.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

use frontier_index::{Aabb2D, Entry, Scalar, StrTree};

use crate::dominance::dominates;
use crate::skyline::Skyline;

/// Error raised by [`Maintainer::delete`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MaintainError {
    /// The entry to delete is not a member of the skyline.
    #[error("deleted entry is not a member of the skyline")]
    EntryNotFound,
}

/// Applies single-entry updates to a computed [`Skyline`].
///
/// `universe_bound` is the largest coordinate value of the dataset's domain.
/// It caps the replacement region when a deleted member has no skyline
/// neighbour on one side, so every coordinate fed to the tree must stay at
/// or below it.
///
/// Updates are strictly one at a time: each call must see the previous one
/// fully applied, and the tree handed to [`delete`](Self::delete) must
/// already reflect the removal.
#[derive(Copy, Clone, Debug)]
pub struct Maintainer<T> {
    universe_bound: T,
}

impl<T: Scalar> Maintainer<T> {
    /// A maintainer for a dataset whose coordinates stay within
    /// `universe_bound`.
    pub const fn new(universe_bound: T) -> Self {
        Self { universe_bound }
    }

    /// Account for one entry added to the indexed set.
    ///
    /// A dominated entry cannot join the skyline: the set is left untouched
    /// and `false` comes back. Otherwise members the new entry dominates are
    /// evicted, the entry is admitted, and `true` comes back. The tree is
    /// never consulted.
    pub fn insert<P: Copy + Debug>(&self, skyline: &mut Skyline<T, P>, entry: Entry<T, P>) -> bool {
        if skyline.dominates(entry.point) {
            return false;
        }
        skyline
            .members
            .retain(|m| !dominates(entry.point, m.point));
        skyline.push(entry);
        true
    }

    /// Account for one member removed from the indexed set.
    ///
    /// Entries that were hidden by the deleted member alone lie inside the
    /// rectangle its sorted skyline neighbours bound (capped by
    /// `universe_bound` where a neighbour is missing). That region of `tree`
    /// is re-queried, its local skyline computed, and the survivors merged
    /// back after the member is dropped. Returns how many entries the merge
    /// recovered.
    ///
    /// `tree` must already reflect the removal; an entry equal to `entry`
    /// showing up in the region query is ignored. Deleting an entry that is
    /// not a member fails with [`MaintainError::EntryNotFound`] and leaves
    /// the set untouched.
    pub fn delete<P>(
        &self,
        skyline: &mut Skyline<T, P>,
        entry: &Entry<T, P>,
        tree: &StrTree<T, P>,
    ) -> Result<usize, MaintainError>
    where
        P: Copy + Debug + PartialEq,
    {
        let i = {
            let members = &mut skyline.members;
            members.sort_by(|a, b| {
                a.point
                    .x
                    .partial_cmp(&b.point.x)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.point.y.partial_cmp(&b.point.y).unwrap_or(Ordering::Equal))
            });
            members
                .iter()
                .position(|m| m == entry)
                .ok_or(MaintainError::EntryNotFound)?
        };

        // In x-order an antichain descends in y, so the successor bounds the
        // region in x and the predecessor bounds it in y.
        let last = skyline.members.len() - 1;
        let x2 = if i == last {
            self.universe_bound
        } else {
            skyline.members[i + 1].point.x
        };
        let y2 = if i == 0 {
            self.universe_bound
        } else {
            skyline.members[i - 1].point.y
        };
        let region = Aabb2D::new(entry.point.x, entry.point.y, x2, y2);

        skyline.members.remove(i);

        let uncovered: Vec<Entry<T, P>> = tree.search(&region).filter(|e| e != entry).collect();
        log::debug!(
            "replacement region {:?} uncovered {} candidate entries",
            region,
            uncovered.len()
        );

        // The closed region boundary can return points a surviving neighbour
        // still dominates, and a coincident twin of the deleted member is
        // already in the set; the insert path rejects both.
        let mut recovered = 0_usize;
        for candidate in Skyline::compute(&StrTree::bulk_load(uncovered)) {
            if skyline.contains(&candidate) {
                continue;
            }
            if self.insert(skyline, candidate) {
                recovered += 1;
            }
        }
        Ok(recovered)
    }
}
