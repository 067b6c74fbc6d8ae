// Copyright 2025 the Frontier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The packed point tree: STR bulk placement, value-semantics updates, and
//! lazy range queries.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

use crate::entry::Entry;
use crate::geometry::{Aabb2D, Scalar, union_aabb};
use crate::node::{NodeKind, NodeRef, PackedNode};

/// Default number of children or entries per packed node.
const DEFAULT_NODE_CAPACITY: usize = 8;

/// STR-packed spatial tree over point entries.
///
/// The tree is a value: [`with_entry`](Self::with_entry) and
/// [`without_entry`](Self::without_entry) return a new tree and leave `self`
/// untouched, so a traversal can keep reading one snapshot while the caller
/// swaps in the next. There is no dynamic node splitting or rebalancing;
/// every construction packs the full entry set in one Sort-Tile-Recursive
/// pass.
#[derive(Clone)]
pub struct StrTree<T: Scalar, P: Copy + Debug> {
    capacity: usize,
    entries: Vec<Entry<T, P>>,
    arena: Vec<PackedNode<T>>,
    root: Option<usize>,
}

impl<T: Scalar, P: Copy + Debug> Default for StrTree<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, P: Copy + Debug> StrTree<T, P> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_NODE_CAPACITY,
            entries: Vec::new(),
            arena: Vec::new(),
            root: None,
        }
    }

    /// Build a tree holding `entries`, packed with the default node capacity.
    pub fn bulk_load(entries: Vec<Entry<T, P>>) -> Self {
        Self::pack(entries, DEFAULT_NODE_CAPACITY)
    }

    /// Build a tree with an explicit node capacity (at least 2).
    pub fn bulk_load_with_node_capacity(entries: Vec<Entry<T, P>>, capacity: usize) -> Self {
        assert!(capacity >= 2, "node capacity must be at least 2");
        Self::pack(entries, capacity)
    }

    /// STR placement: sort by x, tile into vertical slices, sort each slice
    /// by y, and chunk into leaves. Parent levels pack consecutive runs of
    /// the previous level until a single root remains; leaves come out in
    /// slice order, so consecutive runs are already spatially coherent.
    fn pack(mut entries: Vec<Entry<T, P>>, capacity: usize) -> Self {
        if entries.is_empty() {
            return Self {
                capacity,
                entries,
                arena: Vec::new(),
                root: None,
            };
        }

        entries.sort_by(|a, b| {
            a.point
                .x
                .partial_cmp(&b.point.x)
                .unwrap_or(Ordering::Equal)
        });
        let n = entries.len();
        let num_leaves = n.div_ceil(capacity);
        let mut tiles = 1_usize;
        while tiles * tiles < num_leaves {
            tiles += 1;
        }
        let slice_len = n.div_ceil(tiles);
        for slice in entries.chunks_mut(slice_len) {
            slice.sort_by(|a, b| {
                a.point
                    .y
                    .partial_cmp(&b.point.y)
                    .unwrap_or(Ordering::Equal)
            });
        }

        let mut arena: Vec<PackedNode<T>> = Vec::new();
        for slice_start in (0..n).step_by(slice_len) {
            let slice_end = core::cmp::min(slice_start + slice_len, n);
            let mut i = slice_start;
            while i < slice_end {
                let end = core::cmp::min(i + capacity, slice_end);
                let mbr = mbr_of_entries(&entries[i..end]);
                arena.push(PackedNode {
                    mbr,
                    kind: NodeKind::Leaf(i..end),
                });
                i = end;
            }
        }

        // Promote until a single root remains.
        let mut level = 0..arena.len();
        while level.len() > 1 {
            let next_start = arena.len();
            let mut i = level.start;
            while i < level.end {
                let end = core::cmp::min(i + capacity, level.end);
                let mbr = mbr_of_nodes(&arena, i..end);
                arena.push(PackedNode {
                    mbr,
                    kind: NodeKind::Branch(i..end),
                });
                i = end;
            }
            level = next_start..arena.len();
        }

        let root = Some(level.start);
        Self {
            capacity,
            entries,
            arena,
            root,
        }
    }

    /// A new tree that also holds `entry`. `self` is unchanged.
    pub fn with_entry(&self, entry: Entry<T, P>) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self::pack(entries, self.capacity)
    }

    /// A new tree without the first entry structurally equal to `entry`
    /// (key and point). Later duplicates stay; an absent entry leaves the
    /// contents unchanged. `self` is unchanged.
    pub fn without_entry(&self, entry: &Entry<T, P>) -> Self
    where
        P: PartialEq,
    {
        let mut entries = self.entries.clone();
        if let Some(i) = entries.iter().position(|e| e == entry) {
            entries.remove(i);
        }
        Self::pack(entries, self.capacity)
    }

    /// Lazily iterate the entries whose point falls inside `rect` (closed on
    /// all edges). The iterator prunes subtrees whose MBR misses the
    /// rectangle; a fresh call restarts the traversal from the root.
    pub fn search(&self, rect: &Aabb2D<T>) -> RangeQuery<'_, T, P> {
        RangeQuery {
            tree: self,
            rect: *rect,
            stack: self.root.into_iter().collect(),
            leaf: core::slice::Iter::default(),
        }
    }

    /// The root node view; absent iff the tree is empty.
    pub fn root(&self) -> Option<NodeRef<'_, T, P>> {
        self.root.map(|idx| NodeRef {
            arena: &self.arena,
            entries: &self.entries,
            idx,
        })
    }

    /// All entries, in packed order.
    pub fn entries(&self) -> &[Entry<T, P>] {
        &self.entries
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn mbr_of_entries<T: Scalar, P: Copy + Debug>(entries: &[Entry<T, P>]) -> Aabb2D<T> {
    let mut it = entries.iter();
    let first = it.next().expect("packed leaf holds at least one entry");
    it.fold(Aabb2D::from_point(first.point), |acc, e| {
        union_aabb(acc, Aabb2D::from_point(e.point))
    })
}

fn mbr_of_nodes<T: Scalar>(arena: &[PackedNode<T>], range: core::ops::Range<usize>) -> Aabb2D<T> {
    let mut it = range.map(|i| arena[i].mbr);
    let first = it.next().expect("packed branch holds at least one child");
    it.fold(first, union_aabb)
}

impl<T: Scalar, P: Copy + Debug> Debug for StrTree<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StrTree")
            .field("capacity", &self.capacity)
            .field("entries", &self.entries.len())
            .field("arena_nodes", &self.arena.len())
            .field("has_root", &self.root.is_some())
            .finish_non_exhaustive()
    }
}

/// Lazy iterator over the entries inside a query rectangle.
///
/// Yields entries in packed order. Created by [`StrTree::search`].
pub struct RangeQuery<'a, T: Scalar, P: Copy + Debug> {
    tree: &'a StrTree<T, P>,
    rect: Aabb2D<T>,
    stack: Vec<usize>,
    leaf: core::slice::Iter<'a, Entry<T, P>>,
}

impl<'a, T: Scalar, P: Copy + Debug> Iterator for RangeQuery<'a, T, P> {
    type Item = Entry<T, P>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            for e in self.leaf.by_ref() {
                if self.rect.contains(e.point) {
                    return Some(*e);
                }
            }
            let idx = self.stack.pop()?;
            let node = &self.tree.arena[idx];
            if node.mbr.intersect(&self.rect).is_empty() {
                continue;
            }
            match &node.kind {
                NodeKind::Branch(r) => self.stack.extend(r.clone()),
                NodeKind::Leaf(r) => self.leaf = self.tree.entries[r.clone()].iter(),
            }
        }
    }
}

impl<T: Scalar, P: Copy + Debug> Debug for RangeQuery<'_, T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RangeQuery")
            .field("rect", &self.rect)
            .field("stack_depth", &self.stack.len())
            .finish_non_exhaustive()
    }
}

/// Tree with f32 coordinates.
pub type StrTreeF32<P> = StrTree<f32, P>;

/// Tree with f64 coordinates.
pub type StrTreeF64<P> = StrTree<f64, P>;

/// Tree with i64 coordinates.
pub type StrTreeI64<P> = StrTree<i64, P>;
