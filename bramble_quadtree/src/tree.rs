// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quad-tree structure: node state, insertion, and subdivision.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::cells::Cells;
use crate::types::{BoundingBox, PlotPoint};

/// How many points a leaf holds directly before it subdivides.
///
/// Leaves at [`MAX_DEPTH`] are exempt and keep accumulating instead.
pub const LEAF_CAPACITY: usize = 3;

/// Subdivision stops at this depth.
///
/// Coincident (or arbitrarily close) points route to the same quadrant at
/// every level, so without a floor the tree would recurse forever trying to
/// separate them. A leaf at this depth grows past [`LEAF_CAPACITY`] instead.
pub const MAX_DEPTH: u8 = 32;

/// Storage state of a node: a leaf holds up to [`LEAF_CAPACITY`] points
/// directly; an internal node owns exactly four child quadrants.
#[derive(Clone, Debug)]
enum Children<P> {
    Leaf(Vec<PlotPoint<P>>),
    Internal(Box<[QuadTreeNode<P>; 4]>),
}

/// A single node of the quad-tree.
///
/// Every node aggregates the mass (point count) and a running centroid of
/// its whole subtree, so an internal node can stand in for all the points
/// below it during force approximation.
#[derive(Clone, Debug)]
pub struct QuadTreeNode<P> {
    rect: BoundingBox,
    depth: u8,
    mass: usize,
    center: Option<(f64, f64)>,
    children: Children<P>,
}

impl<P: Copy + Debug> QuadTreeNode<P> {
    fn new(rect: BoundingBox, depth: u8) -> Self {
        Self {
            rect,
            depth,
            mass: 0,
            center: None,
            children: Children::Leaf(Vec::new()),
        }
    }

    /// This node's bounding box.
    pub fn rect(&self) -> BoundingBox {
        self.rect
    }

    /// Number of points ever inserted into this subtree.
    pub fn mass(&self) -> usize {
        self.mass
    }

    /// Running centroid of the subtree, `None` before the first insertion.
    ///
    /// The first inserted point sets the centroid directly; every later
    /// insertion halves the centroid toward the new point. This decayed
    /// running average weights recent insertions more heavily than a true
    /// mean; it is cheaper to maintain and adequate as a point-mass stand-in
    /// for force approximation.
    pub fn center(&self) -> Option<(f64, f64)> {
        self.center
    }

    /// Whether this node has subdivided into four quadrants.
    pub fn is_internal(&self) -> bool {
        matches!(self.children, Children::Internal(_))
    }

    /// The four child quadrants in [`Quadrant::ALL`](crate::Quadrant::ALL)
    /// order, or `None` for a leaf.
    pub fn quadrants(&self) -> Option<&[QuadTreeNode<P>; 4]> {
        match &self.children {
            Children::Internal(q) => Some(q),
            Children::Leaf(_) => None,
        }
    }

    /// Points held directly by this leaf. Empty for internal nodes.
    pub fn points(&self) -> &[PlotPoint<P>] {
        match &self.children {
            Children::Leaf(points) => points,
            Children::Internal(_) => &[],
        }
    }

    /// Insert a point into this subtree.
    ///
    /// Containment is never validated: a point outside this node's box still
    /// contributes to mass and centroid and routes to whichever edge quadrant
    /// the midpoint comparisons select.
    ///
    /// Subdivision stops at [`MAX_DEPTH`]: a leaf there accumulates past
    /// [`LEAF_CAPACITY`], so coincident points terminate instead of recursing
    /// on quadrants that can never separate them.
    pub fn insert(&mut self, point: PlotPoint<P>) {
        debug_assert!(
            point.x.is_finite() && point.y.is_finite(),
            "inserted coordinates must be finite"
        );
        self.mass += 1;
        self.center = Some(match self.center {
            None => (point.x, point.y),
            Some((cx, cy)) => ((cx + point.x) / 2.0, (cy + point.y) / 2.0),
        });
        match &mut self.children {
            Children::Internal(quadrants) => {
                let q = self.rect.quadrant_of(point.x, point.y);
                quadrants[q.ix()].insert(point);
            }
            Children::Leaf(points) => {
                if points.len() < LEAF_CAPACITY || self.depth >= MAX_DEPTH {
                    points.push(point);
                    return;
                }
                // Overflow: subdivide and push the held points down. They were
                // already counted in this node's mass and centroid when first
                // inserted; only the fresh children see them again.
                let held = core::mem::take(points);
                let depth = self.depth + 1;
                let mut quadrants = Box::new(self.rect.subdivide().map(|r| Self::new(r, depth)));
                for p in held.into_iter().chain(core::iter::once(point)) {
                    let q = self.rect.quadrant_of(p.x, p.y);
                    quadrants[q.ix()].insert(p);
                }
                self.children = Children::Internal(quadrants);
            }
        }
    }
}

/// A quad-tree over a fixed plot rectangle.
///
/// One instance serves a single layout pass: build, insert every node,
/// query, discard. There is no removal or rebalancing; rebuild instead.
#[derive(Clone, Debug)]
pub struct QuadTree<P> {
    rect: BoundingBox,
    root: QuadTreeNode<P>,
}

impl<P: Copy + Debug> QuadTree<P> {
    /// Create a tree covering the given plot rectangle.
    ///
    /// Width and height are not validated; a degenerate rectangle is
    /// accepted and quadrant routing collapses onto its edges.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::from_rect(BoundingBox::new(left, top, width, height))
    }

    /// Create a tree covering `rect`.
    pub fn from_rect(rect: BoundingBox) -> Self {
        Self {
            rect,
            root: QuadTreeNode::new(rect, 0),
        }
    }

    /// The plot rectangle fixed at construction.
    pub fn rect(&self) -> BoundingBox {
        self.rect
    }

    /// The root node, carrying whole-tree mass and centroid.
    pub fn root(&self) -> &QuadTreeNode<P> {
        &self.root
    }

    /// Insert a single point.
    pub fn insert(&mut self, point: PlotPoint<P>) {
        self.root.insert(point);
    }

    /// Insert points in iteration order.
    ///
    /// Sequential insertion is the only contract: reordering the input can
    /// produce a structurally different tree (and different centroids) with
    /// the same aggregate mass.
    pub fn insert_points(&mut self, points: impl IntoIterator<Item = PlotPoint<P>>) {
        for point in points {
            self.root.insert(point);
        }
    }

    /// Lazy pre-order traversal over the bounding boxes of internal nodes,
    /// for debug overlays. See [`Cells`].
    pub fn cells(&self) -> Cells<'_, P> {
        Cells::new(&self.root)
    }
}
