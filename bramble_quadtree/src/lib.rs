// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bramble Quadtree: recursive 2D spatial partitioning for force approximation.
//!
//! Bramble Quadtree is the clustering structure behind Barnes-Hut style
//! N-body approximation: it subdivides a fixed plot rectangle into quadrants
//! as points accumulate and keeps a mass (point count) and running centroid
//! per cell, so a force pass can treat a whole distant cell as a single
//! point mass instead of visiting every point in it.
//!
//! - Insert points with payloads via [`QuadTree::insert`] / [`QuadTree::insert_points`].
//! - Read per-cell aggregates ([`QuadTreeNode::mass`], [`QuadTreeNode::center`])
//!   and walk quadrants for the force pass.
//! - Iterate internal-cell rectangles with [`QuadTree::cells`] for debug overlays.
//!
//! A tree serves exactly one layout pass: build it over the plot area, insert
//! every node, query it, drop it. There is no removal or rebalancing; the
//! next pass builds a fresh tree. Leaves hold up to [`LEAF_CAPACITY`] points
//! before subdividing into four fixed-order quadrants (top-left, top-right,
//! bottom-right, bottom-left). Subdivision stops at [`MAX_DEPTH`]; a leaf
//! there keeps accumulating, so coincident points terminate instead of
//! recursing on quadrants that can never separate them.
//!
//! The force-summation algorithm itself lives in a consumer crate
//! (`bramble_layout`); this crate supplies only the partition and its
//! aggregate statistics, and does not depend on any geometry crate.
//!
//! # Example
//!
//! ```rust
//! use bramble_quadtree::{PlotPoint, QuadTree};
//!
//! // One tree per layout pass, covering the plot rectangle.
//! let mut tree: QuadTree<u32> = QuadTree::new(0.0, 0.0, 100.0, 100.0);
//! tree.insert_points([
//!     PlotPoint::new(10.0, 10.0, 0),
//!     PlotPoint::new(90.0, 10.0, 1),
//!     PlotPoint::new(90.0, 90.0, 2),
//!     PlotPoint::new(10.0, 90.0, 3),
//!     PlotPoint::new(50.0, 50.0, 4),
//! ]);
//!
//! // The root aggregates the whole tree.
//! assert_eq!(tree.root().mass(), 5);
//! assert!(tree.root().is_internal());
//!
//! // Internal cells are available for a debug overlay.
//! let cells: Vec<_> = tree.cells().collect();
//! assert_eq!(cells[0], tree.rect());
//! ```
//!
//! ### Float semantics
//!
//! Coordinates are assumed finite (no NaNs); debug builds assert. Rectangle
//! sizes are not validated: degenerate boxes and out-of-range points are
//! accepted and route deterministically to edge quadrants, matching the
//! "insert whatever the layout hands you" contract of the force pipeline.
//!
//! ### Centroid semantics
//!
//! The per-cell centroid is a decayed running average: the first point sets
//! it, every later insertion halves it toward the new point. It is not the
//! arithmetic mean. The update is O(1) with no per-cell weight bookkeeping,
//! and the bias toward recent insertions is acceptable for repulsion
//! estimates over distant cells. Consumers needing an exact mean must
//! compute it from the leaf points.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod cells;
pub mod tree;
pub mod types;

pub use cells::Cells;
pub use tree::{LEAF_CAPACITY, MAX_DEPTH, QuadTree, QuadTreeNode};
pub use types::{BoundingBox, PlotPoint, Quadrant};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn build_query_and_traverse() {
        let mut tree: QuadTree<u32> = QuadTree::new(0.0, 0.0, 200.0, 200.0);
        tree.insert_points((0..16).map(|i| {
            PlotPoint::new(
                f64::from(i % 4) * 50.0 + 5.0,
                f64::from(i / 4) * 50.0 + 5.0,
                i,
            )
        }));
        assert_eq!(tree.root().mass(), 16);
        assert!(tree.root().is_internal());

        // Each top-level quadrant aggregates its own four points.
        let quadrants = tree.root().quadrants().unwrap();
        assert_eq!(quadrants.iter().map(QuadTreeNode::mass).sum::<usize>(), 16);

        let cells: Vec<BoundingBox> = tree.cells().collect();
        assert_eq!(cells[0], tree.rect());
        assert!(cells.len() > 1);
    }

    #[test]
    fn empty_tree_has_no_mass_or_center() {
        let tree: QuadTree<u32> = QuadTree::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(tree.root().mass(), 0);
        assert_eq!(tree.root().center(), None);
        assert!(!tree.root().is_internal());
        assert_eq!(tree.cells().count(), 0);
    }
}
