// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lays out a small network and prints the final node positions.

use bramble_layout::{ForceLayout, LayoutOptions, Placement};
use kurbo::{Point, Rect};

fn main() {
    let mut layout = ForceLayout::new(
        Rect::new(0.0, 0.0, 400.0, 300.0),
        LayoutOptions {
            placement: Placement::Circle,
            max_iterations: 200,
            ..LayoutOptions::default()
        },
    );

    // A hub with five spokes plus one free-floating pair.
    let hub = layout.add_node(Point::ZERO);
    let spokes: Vec<_> = (0..5).map(|_| layout.add_node(Point::ZERO)).collect();
    for &s in &spokes {
        layout.add_link(hub, s);
    }
    let a = layout.add_node(Point::ZERO);
    let b = layout.add_node(Point::ZERO);
    layout.add_link(a, b);

    layout.place();
    layout.run();

    println!(
        "settled after {} iterations (stable: {})",
        layout.iteration(),
        layout.is_stable()
    );
    for (i, p) in layout.positions().enumerate() {
        println!("node {}: ({:.1}, {:.1})", i, p.x, p.y);
    }
}
