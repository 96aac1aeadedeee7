// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Bramble Quadtree: insert points, read aggregates, walk cells.

use bramble_quadtree::{PlotPoint, QuadTree};

fn main() {
    let mut tree: QuadTree<u32> = QuadTree::new(0.0, 0.0, 100.0, 100.0);
    tree.insert_points([
        PlotPoint::new(10.0, 10.0, 0),
        PlotPoint::new(90.0, 10.0, 1),
        PlotPoint::new(90.0, 90.0, 2),
        PlotPoint::new(10.0, 90.0, 3),
        PlotPoint::new(50.0, 50.0, 4),
    ]);

    let root = tree.root();
    println!("mass: {}, center: {:?}", root.mass(), root.center());

    // Internal cells, parent before children: the debug-overlay boundary.
    for cell in tree.cells() {
        println!(
            "cell at ({}, {}) size {}x{}",
            cell.left, cell.top, cell.width, cell.height
        );
    }
}
