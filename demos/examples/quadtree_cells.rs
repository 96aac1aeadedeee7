// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds a quad-tree over scattered points and prints the internal cells
//! a debug overlay would draw.

use bramble_quadtree::{PlotPoint, QuadTree};

fn main() {
    let mut tree: QuadTree<u32> = QuadTree::new(0.0, 0.0, 256.0, 256.0);

    // A cluster in one corner plus a few spread points, so some branches
    // subdivide deeply and others stay leaves.
    let points = [
        (10.0, 10.0),
        (14.0, 12.0),
        (12.0, 16.0),
        (18.0, 14.0),
        (16.0, 18.0),
        (200.0, 40.0),
        (220.0, 210.0),
        (60.0, 230.0),
    ];
    tree.insert_points(
        points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| PlotPoint::new(x, y, i as u32)),
    );

    let root = tree.root();
    println!(
        "{} points, root center {:?}",
        root.mass(),
        root.center().unwrap()
    );
    for (i, cell) in tree.cells().enumerate() {
        println!(
            "cell {}: ({}, {}) {}x{}",
            i, cell.left, cell.top, cell.width, cell.height
        );
    }
}
