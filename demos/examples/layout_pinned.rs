// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pins one node the way a drag interaction would, reheats, and shows the
//! rest of the graph settling around it.

use bramble_layout::{ForceLayout, LayoutOptions, Placement};
use kurbo::{Point, Rect};

fn main() {
    let mut layout = ForceLayout::new(
        Rect::new(0.0, 0.0, 400.0, 300.0),
        LayoutOptions {
            placement: Placement::Scatter,
            max_iterations: 150,
            ..LayoutOptions::default()
        },
    );

    let ids: Vec<_> = (0..8).map(|_| layout.add_node(Point::ZERO)).collect();
    for w in ids.windows(2) {
        layout.add_link(w[0], w[1]);
    }
    layout.place();
    layout.run();

    // "Drag" the first node to a corner: move, pin, reheat, re-run.
    let dragged = ids[0];
    layout.set_position(dragged, Point::new(20.0, 20.0));
    layout.pin(dragged);
    layout.reheat();
    layout.run();

    println!("dragged node stayed at {:?}", layout.position(dragged));
    for (i, p) in layout.positions().enumerate() {
        println!("node {}: ({:.1}, {:.1})", i, p.x, p.y);
    }
}
