// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive plot-space types: bounding boxes, quadrants, and points.

/// Axis-aligned rectangle in plot coordinates, stored as origin and size.
///
/// Construction performs no validation; a non-positive width or height is
/// accepted and degenerates quadrant selection rather than erroring. Debug
/// builds assert finiteness.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    /// Left edge (minimum x).
    pub left: f64,
    /// Top edge (minimum y).
    pub top: f64,
    /// Width of the box.
    pub width: f64,
    /// Height of the box.
    pub height: f64,
}

impl BoundingBox {
    /// Create a box from origin and size.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        debug_assert!(
            left.is_finite() && top.is_finite() && width.is_finite() && height.is_finite(),
            "box coordinates must be finite"
        );
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Horizontal midpoint.
    pub fn mid_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical midpoint.
    pub fn mid_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Split into four equal quadrants, half width and half height each,
    /// in [`Quadrant::ALL`] order. Their union covers this box exactly.
    pub fn subdivide(&self) -> [Self; 4] {
        let w = self.width / 2.0;
        let h = self.height / 2.0;
        [
            Self::new(self.left, self.top, w, h),
            Self::new(self.left + w, self.top, w, h),
            Self::new(self.left + w, self.top + h, w, h),
            Self::new(self.left, self.top + h, w, h),
        ]
    }

    /// Which quadrant a point falls into.
    ///
    /// Pure comparison against the two midpoints. A coordinate exactly on a
    /// midpoint resolves to the left/top side; the right/bottom side is
    /// chosen only when the midpoint is strictly less than the coordinate.
    /// Points outside the box are still mapped to the nearest edge quadrant;
    /// containment is never checked.
    pub fn quadrant_of(&self, x: f64, y: f64) -> Quadrant {
        let right = self.mid_x() < x;
        let bottom = self.mid_y() < y;
        match (right, bottom) {
            (false, false) => Quadrant::TopLeft,
            (true, false) => Quadrant::TopRight,
            (true, true) => Quadrant::BottomRight,
            (false, true) => Quadrant::BottomLeft,
        }
    }
}

/// One of the four quadrants of a subdivided box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Left half, top half.
    TopLeft,
    /// Right half, top half.
    TopRight,
    /// Right half, bottom half.
    BottomRight,
    /// Left half, bottom half.
    BottomLeft,
}

impl Quadrant {
    /// All quadrants in child-index order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Child index of this quadrant (0..=3).
    pub const fn ix(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomRight => 2,
            Self::BottomLeft => 3,
        }
    }
}

/// A point in plot coordinates with a caller payload.
///
/// The tree only reads the coordinates; payloads are stored and returned
/// untouched, typically carrying the identity of a graph node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlotPoint<P> {
    /// Plot-space x coordinate.
    pub x: f64,
    /// Plot-space y coordinate.
    pub y: f64,
    /// Caller payload.
    pub payload: P,
}

impl<P> PlotPoint<P> {
    /// Create a point from coordinates and payload.
    pub const fn new(x: f64, y: f64, payload: P) -> Self {
        Self { x, y, payload }
    }
}
