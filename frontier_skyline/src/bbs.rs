// Copyright 2025 the Frontier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Branch-and-bound traversal producing the skyline of a packed tree.

use alloc::collections::BinaryHeap;
use core::cmp::Ordering;
use core::fmt::Debug;

use frontier_index::{Entry, NodeContents, NodeRef, Point2D, Scalar, StrTree};

use crate::skyline::Skyline;

/// A subtree awaiting expansion, or an entry awaiting confirmation.
enum Candidate<'a, T: Scalar, P: Copy + Debug> {
    Node(NodeRef<'a, T, P>),
    Entry(Entry<T, P>),
}

/// Heap item keyed by `mindist`, the coordinate sum of a node MBR's
/// lower-left corner or of an entry's point.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed: the smallest
/// `mindist` compares greatest. At equal `mindist`, entries sort ahead of
/// nodes; confirming an entry first can only sharpen later pruning. Any
/// remaining tie is left unordered and cannot change the resulting set.
struct QueueItem<'a, T: Scalar, P: Copy + Debug> {
    mindist: T,
    candidate: Candidate<'a, T, P>,
}

impl<T: Scalar, P: Copy + Debug> QueueItem<'_, T, P> {
    fn rank(&self) -> u8 {
        match self.candidate {
            Candidate::Entry(_) => 0,
            Candidate::Node(_) => 1,
        }
    }
}

impl<T: Scalar, P: Copy + Debug> PartialEq for QueueItem<'_, T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Scalar, P: Copy + Debug> Eq for QueueItem<'_, T, P> {}

impl<T: Scalar, P: Copy + Debug> PartialOrd for QueueItem<'_, T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Scalar, P: Copy + Debug> Ord for QueueItem<'_, T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .mindist
            .partial_cmp(&self.mindist)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.rank().cmp(&self.rank()))
    }
}

#[inline]
fn mindist<T: Scalar>(p: Point2D<T>) -> T {
    T::add(p.x, p.y)
}

impl<T: Scalar, P: Copy + Debug> Skyline<T, P> {
    /// Compute the skyline of every entry reachable from the root of `tree`.
    ///
    /// The traversal expands subtrees in ascending `mindist` order and skips
    /// any child whose MBR lower-left corner is dominated by a confirmed
    /// member: that corner dominates every point inside the subtree, so a
    /// dominated corner proves the subtree holds no skyline point. Entries
    /// are re-tested when popped because the set may have grown since they
    /// were enqueued. An empty tree yields an empty skyline.
    ///
    /// Two runs over the same tree produce the same set regardless of how
    /// equal-priority items interleave.
    ///
    /// ```rust
    /// use frontier_index::{Entry, Point2D, StrTreeF64};
    /// use frontier_skyline::Skyline;
    ///
    /// let tree = StrTreeF64::bulk_load(vec![
    ///     Entry::new('a', Point2D::new(1.0, 5.0)),
    ///     Entry::new('b', Point2D::new(2.0, 3.0)),
    ///     Entry::new('c', Point2D::new(4.0, 1.0)),
    ///     Entry::new('d', Point2D::new(3.0, 3.0)),
    /// ]);
    /// let skyline = Skyline::compute(&tree);
    /// let mut keys: Vec<char> = skyline.iter().map(|e| e.key).collect();
    /// keys.sort_unstable();
    /// assert_eq!(keys, ['a', 'b', 'c']);
    /// ```
    pub fn compute(tree: &StrTree<T, P>) -> Self {
        let mut result = Self::new();
        let mut heap: BinaryHeap<QueueItem<'_, T, P>> = BinaryHeap::new();
        let mut pruned = 0_usize;

        if let Some(root) = tree.root() {
            heap.push(QueueItem {
                mindist: mindist(root.mbr().lower_left()),
                candidate: Candidate::Node(root),
            });
        }

        while let Some(item) = heap.pop() {
            match item.candidate {
                Candidate::Node(node) => match node.contents() {
                    NodeContents::Branch(children) => {
                        for child in children {
                            let corner = child.mbr().lower_left();
                            if result.dominates(corner) {
                                pruned += 1;
                                continue;
                            }
                            heap.push(QueueItem {
                                mindist: mindist(corner),
                                candidate: Candidate::Node(child),
                            });
                        }
                    }
                    NodeContents::Leaf(entries) => {
                        for &entry in entries {
                            if result.dominates(entry.point) {
                                continue;
                            }
                            heap.push(QueueItem {
                                mindist: mindist(entry.point),
                                candidate: Candidate::Entry(entry),
                            });
                        }
                    }
                },
                Candidate::Entry(entry) => {
                    // The set may have grown since the entry was enqueued.
                    if !result.dominates(entry.point) {
                        result.push(entry);
                    }
                }
            }
        }

        log::debug!(
            "skyline over {} entries: {} members, {} subtrees pruned",
            tree.len(),
            result.len(),
            pruned
        );
        result
    }
}
