// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traversal over internal cells, the rendering/debug boundary of the tree.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::tree::QuadTreeNode;
use crate::types::BoundingBox;

/// Lazy depth-first pre-order iterator over the bounding boxes of internal
/// nodes, quadrants visited in child-index order.
///
/// This is the whole interface a debug-overlay renderer consumes: one
/// rectangle per subdivided cell, parent before children. The iterator is
/// finite and each call to [`QuadTree::cells`](crate::QuadTree::cells)
/// starts a fresh traversal. A tree that never subdivided yields nothing.
#[derive(Debug)]
pub struct Cells<'a, P> {
    stack: Vec<&'a QuadTreeNode<P>>,
}

impl<'a, P> Cells<'a, P> {
    pub(crate) fn new(root: &'a QuadTreeNode<P>) -> Self {
        let mut stack = Vec::new();
        stack.push(root);
        Self { stack }
    }
}

impl<P: Copy + Debug> Iterator for Cells<'_, P> {
    type Item = BoundingBox;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if let Some(quadrants) = node.quadrants() {
                // Reverse push so quadrant 0 is visited first.
                for q in quadrants.iter().rev() {
                    self.stack.push(q);
                }
                return Some(node.rect());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::tree::QuadTree;
    use crate::types::{BoundingBox, PlotPoint};

    fn filled_tree() -> QuadTree<u32> {
        let mut tree = QuadTree::new(0.0, 0.0, 100.0, 100.0);
        // Four spread points subdivide the root; three clustered points
        // subdivide its top-left quadrant as well.
        tree.insert_points(
            [
                (10.0, 10.0),
                (90.0, 10.0),
                (90.0, 90.0),
                (10.0, 90.0),
                (5.0, 5.0),
                (6.0, 6.0),
                (7.0, 7.0),
            ]
            .map(|(x, y)| PlotPoint::new(x, y, 0)),
        );
        tree
    }

    #[test]
    fn leaf_only_tree_yields_nothing() {
        let mut tree: QuadTree<u32> = QuadTree::new(0.0, 0.0, 100.0, 100.0);
        tree.insert(PlotPoint::new(50.0, 50.0, 0));
        assert_eq!(tree.cells().count(), 0);
    }

    #[test]
    fn preorder_parent_before_children() {
        let tree = filled_tree();
        let cells: Vec<BoundingBox> = tree.cells().collect();
        assert_eq!(cells[0], tree.rect(), "root cell comes first");
        // The subdivided top-left quadrant follows immediately, before the
        // later quadrants of the root.
        assert_eq!(cells[1], BoundingBox::new(0.0, 0.0, 50.0, 50.0));
        for cell in &cells[1..] {
            assert!(cell.width < tree.rect().width);
        }
    }

    #[test]
    fn traversal_is_restartable() {
        let tree = filled_tree();
        let first: Vec<BoundingBox> = tree.cells().collect();
        let second: Vec<BoundingBox> = tree.cells().collect();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}
