// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bramble Layout: Kurbo-native force-directed graph layout.
//!
//! Bramble Layout arranges network-graph nodes inside a fixed plot
//! rectangle using a Fruchterman-Reingold force model: linked nodes
//! attract, all nodes repel, and an optional gravity term pulls the graph
//! toward its barycenter. Long-range repulsion is approximated Barnes-Hut
//! style over a [`bramble_quadtree::QuadTree`] built fresh each iteration,
//! turning the O(n^2) pairwise pass into O(n log n) with a tunable error
//! bound (`theta`). An exact all-pairs pass is available for reference and
//! for small graphs.
//!
//! ## Where this fits
//!
//! This crate is the canonical consumer of `bramble_quadtree`: it feeds
//! node positions in and reads per-cell mass and centroid back out during
//! the repulsion pass. Rendering is someone else's job; callers read
//! [`ForceLayout::positions`] after each step (or after [`ForceLayout::run`])
//! and draw however they like. The quad-tree's cell traversal is available
//! through the tree for debug overlays.
//!
//! ## API overview
//!
//! - [`ForceLayout`]: graph state plus the simulation loop.
//! - [`NodeId`]: plain append-only node handle.
//! - [`NodeFlags`]: [`ACTIVE`](NodeFlags::ACTIVE) and
//!   [`FIXED`](NodeFlags::FIXED) participation controls; pinning is the
//!   hook for drag interactions, together with [`ForceLayout::set_position`]
//!   and [`ForceLayout::reheat`].
//! - [`LayoutOptions`]: tunables with documented defaults, including the
//!   [`Integrator`] (Euler or Verlet), the repulsion [`Approximation`], and
//!   the deterministic initial [`Placement`].
//!
//! Key operations:
//! - [`ForceLayout::add_node`] / [`ForceLayout::add_link`] build the graph.
//! - [`ForceLayout::place`] applies a deterministic initial placement.
//! - [`ForceLayout::step`] runs one iteration; [`ForceLayout::run`] iterates
//!   until stable or the cap is hit.
//! - [`ForceLayout::pin`] / [`ForceLayout::unpin`] / [`ForceLayout::set_active`]
//!   adjust participation mid-run.
//!
//! # Example
//!
//! ```rust
//! use bramble_layout::{ForceLayout, LayoutOptions};
//! use kurbo::{Point, Rect};
//!
//! let mut layout = ForceLayout::new(
//!     Rect::new(0.0, 0.0, 400.0, 300.0),
//!     LayoutOptions::default(),
//! );
//!
//! let a = layout.add_node(Point::new(100.0, 100.0));
//! let b = layout.add_node(Point::new(300.0, 100.0));
//! let c = layout.add_node(Point::new(200.0, 200.0));
//! layout.add_link(a, b);
//! layout.add_link(b, c);
//!
//! layout.run();
//!
//! assert!(layout.iteration() > 0);
//! // Positions stay inside the plot rectangle.
//! for p in layout.positions() {
//!     assert!(p.x >= 0.0 && p.x <= 400.0);
//!     assert!(p.y >= 0.0 && p.y <= 300.0);
//! }
//! ```
//!
//! ### Float semantics
//!
//! Positions and forces are `f64` and assumed finite; debug builds may
//! assert (via the quad-tree) but release builds propagate whatever the
//! arithmetic produces, matching the infallible, no-`Result` surface of
//! the rest of the stack.
//!
//! This crate is `no_std` and uses `alloc`. Enable the `std` feature
//! (default) or `libm` to provide float math through Kurbo.

#![no_std]

extern crate alloc;

pub mod layout;
pub mod types;

pub use layout::ForceLayout;
pub use types::{Approximation, Integrator, LayoutOptions, NodeFlags, NodeId, Placement};
