// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core layout implementation: graph state, force passes, integration.

use alloc::vec::Vec;
use core::f64::consts::{PI, TAU};

use bramble_quadtree::{PlotPoint, QuadTree, QuadTreeNode};
use kurbo::{Point, Rect, Vec2};

use crate::types::{Approximation, Integrator, LayoutOptions, NodeFlags, NodeId, Placement};

// FloatFuncs supplies sqrt/sin/cos/floor in no_std builds; with std the
// inherent methods cover them and the trait is not compiled in.
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs;

#[derive(Clone, Debug)]
struct GraphNode {
    pos: Point,
    prev: Point, // previous position, read by the Verlet integrator
    vel: Vec2,   // damped velocity, read by the Euler integrator
    disp: Vec2,  // force accumulator for the current iteration
    flags: NodeFlags,
}

impl GraphNode {
    fn new(pos: Point) -> Self {
        Self {
            pos,
            prev: pos,
            vel: Vec2::ZERO,
            disp: Vec2::ZERO,
            flags: NodeFlags::default(),
        }
    }

    fn is_active(&self) -> bool {
        self.flags.contains(NodeFlags::ACTIVE)
    }
}

/// Force-directed graph layout over a fixed plot rectangle.
///
/// Each [`step`](Self::step) runs one Fruchterman-Reingold iteration:
/// repulsion between all active nodes (exact or Barnes-Hut over a freshly
/// built quad-tree), attraction along links, optional barycenter gravity,
/// then integration with a cooling movement cap and a clamp into the plot
/// rectangle. The quad-tree is rebuilt from scratch every iteration and
/// discarded; nothing is rebalanced in place.
pub struct ForceLayout {
    plot: Rect,
    options: LayoutOptions,
    nodes: Vec<GraphNode>,
    links: Vec<(NodeId, NodeId)>,
    iteration: u32,
    last_displacement: f64, // mean squared displacement of the last step
}

impl core::fmt::Debug for ForceLayout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ForceLayout")
            .field("nodes", &self.nodes.len())
            .field("links", &self.links.len())
            .field("iteration", &self.iteration)
            .field("last_displacement", &self.last_displacement)
            .field("plot", &self.plot)
            .finish_non_exhaustive()
    }
}

impl ForceLayout {
    /// Create an empty layout over `plot` with the given options.
    pub fn new(plot: Rect, options: LayoutOptions) -> Self {
        Self {
            plot,
            options,
            nodes: Vec::new(),
            links: Vec::new(),
            iteration: 0,
            last_displacement: f64::INFINITY,
        }
    }

    /// The plot rectangle fixed at construction.
    pub fn plot(&self) -> Rect {
        self.plot
    }

    /// The options this layout runs with.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of links in the graph.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Iterations run since construction or the last [`reheat`](Self::reheat).
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// Add a node at `pos`. Nodes start active and unpinned.
    pub fn add_node(&mut self, pos: Point) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(GraphNode::new(pos));
        id
    }

    /// Add an undirected link between two nodes. Self-links are kept but
    /// exert no force.
    pub fn add_link(&mut self, a: NodeId, b: NodeId) {
        self.links.push((a, b));
    }

    /// Current position of a node.
    ///
    /// An id this layout never issued yields `Point::ZERO`, matching the
    /// setters that ignore unknown ids.
    pub fn position(&self, id: NodeId) -> Point {
        self.nodes.get(id.ix()).map_or(Point::ZERO, |n| n.pos)
    }

    /// Positions of all nodes, in insertion order.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().map(|n| n.pos)
    }

    /// Flags of a node.
    ///
    /// An id this layout never issued yields [`NodeFlags::empty`], matching
    /// the setters that ignore unknown ids.
    pub fn flags(&self, id: NodeId) -> NodeFlags {
        self.nodes.get(id.ix()).map_or(NodeFlags::empty(), |n| n.flags)
    }

    /// Move a node, clearing any accumulated velocity.
    pub fn set_position(&mut self, id: NodeId, pos: Point) {
        if let Some(node) = self.nodes.get_mut(id.ix()) {
            node.pos = pos;
            node.prev = pos;
            node.vel = Vec2::ZERO;
        }
    }

    /// Pin a node in place. It keeps repelling and attracting others.
    pub fn pin(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(id.ix()) {
            node.flags.insert(NodeFlags::FIXED);
        }
    }

    /// Unpin a node.
    pub fn unpin(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(id.ix()) {
            node.flags.remove(NodeFlags::FIXED);
        }
    }

    /// Include or exclude a node from the simulation entirely.
    pub fn set_active(&mut self, id: NodeId, active: bool) {
        if let Some(node) = self.nodes.get_mut(id.ix()) {
            node.flags.set(NodeFlags::ACTIVE, active);
        }
    }

    /// Apply the configured deterministic initial placement to every node,
    /// overwriting current positions.
    pub fn place(&mut self) {
        let n = self.nodes.len();
        if n == 0 {
            return;
        }
        match self.options.placement {
            Placement::Circle => {
                let center = self.plot.center();
                let radius = self.plot.width().min(self.plot.height()) / 3.0;
                for (i, node) in self.nodes.iter_mut().enumerate() {
                    let angle = TAU * (i as f64) / (n as f64);
                    let pos = center + Vec2::new(angle.cos(), angle.sin()) * radius;
                    node.pos = pos;
                    node.prev = pos;
                    node.vel = Vec2::ZERO;
                }
            }
            Placement::Scatter => {
                for (i, node) in self.nodes.iter_mut().enumerate() {
                    let pos = Point::new(
                        self.plot.x0 + self.plot.width() * unrandom(i),
                        self.plot.y0 + self.plot.height() * unrandom(n + i),
                    );
                    node.pos = pos;
                    node.prev = pos;
                    node.vel = Vec2::ZERO;
                }
            }
        }
    }

    /// Whether the simulation has settled below the stability threshold.
    pub fn is_stable(&self) -> bool {
        self.last_displacement < self.options.stability_threshold
    }

    /// Restart cooling after an external disturbance, for example a drag
    /// interaction moving a pinned node.
    pub fn reheat(&mut self) {
        self.iteration = 0;
        self.last_displacement = f64::INFINITY;
    }

    /// Run one simulation iteration.
    pub fn step(&mut self) {
        let n_active = self.nodes.iter().filter(|n| n.is_active()).count();
        if n_active == 0 {
            self.last_displacement = 0.0;
            self.iteration = self.iteration.saturating_add(1);
            return;
        }
        let k = self
            .options
            .link_length
            .unwrap_or_else(|| (self.plot.area() / n_active as f64).sqrt());

        for node in &mut self.nodes {
            node.disp = Vec2::ZERO;
        }
        match self.options.approximation {
            Approximation::BarnesHut => self.repulsive_barnes_hut(k),
            Approximation::Exact => self.repulsive_exact(k),
        }
        self.attractive(k);
        if self.options.gravity > 0.0 {
            self.gravity(k);
        }
        self.integrate(n_active);
        self.iteration = self.iteration.saturating_add(1);
    }

    /// Step until stable or the iteration cap is reached.
    pub fn run(&mut self) {
        while !self.is_stable() && self.iteration < self.options.max_iterations {
            self.step();
        }
    }

    // --- force passes ---

    fn repulsive_exact(&mut self, k: f64) {
        for i in 0..self.nodes.len() {
            if !self.nodes[i].is_active() {
                continue;
            }
            let mut disp = Vec2::ZERO;
            let pos = self.nodes[i].pos;
            for (j, other) in self.nodes.iter().enumerate() {
                if i == j || !other.is_active() {
                    continue;
                }
                disp += repulsion(pos, other.pos, 1.0, k);
            }
            self.nodes[i].disp += disp;
        }
    }

    fn repulsive_barnes_hut(&mut self, k: f64) {
        // Build fresh, use for one pass, drop. The tree reads positions only.
        let mut tree: QuadTree<u32> = QuadTree::new(
            self.plot.x0,
            self.plot.y0,
            self.plot.width(),
            self.plot.height(),
        );
        tree.insert_points(
            self.nodes
                .iter()
                .enumerate()
                .filter(|(_, n)| n.is_active())
                .map(|(ix, n)| PlotPoint::new(n.pos.x, n.pos.y, NodeId::new(ix).0)),
        );
        let theta = self.options.theta;
        for i in 0..self.nodes.len() {
            if !self.nodes[i].is_active() {
                continue;
            }
            let pos = self.nodes[i].pos;
            let self_ix = NodeId::new(i).0;
            self.nodes[i].disp += repulsion_from_cell(pos, self_ix, tree.root(), k, theta);
        }
    }

    fn attractive(&mut self, k: f64) {
        for li in 0..self.links.len() {
            let (a, b) = self.links[li];
            if a == b {
                continue;
            }
            let (i, j) = (a.ix(), b.ix());
            if !self.nodes[i].is_active() || !self.nodes[j].is_active() {
                continue;
            }
            let delta = self.nodes[i].pos - self.nodes[j].pos;
            let d = delta.hypot();
            if d == 0.0 {
                continue;
            }
            // Attraction d^2 / k along the link, applied to both endpoints.
            let shift = delta * (d / k);
            self.nodes[i].disp -= shift;
            self.nodes[j].disp += shift;
        }
    }

    fn gravity(&mut self, k: f64) {
        let mut barycenter = Vec2::ZERO;
        let mut count = 0_usize;
        for node in self.nodes.iter().filter(|n| n.is_active()) {
            barycenter += node.pos.to_vec2();
            count += 1;
        }
        if count == 0 {
            return;
        }
        let barycenter = (barycenter / count as f64).to_point();
        let strength = self.options.gravity * k;
        for node in &mut self.nodes {
            if node.is_active() {
                node.disp += (barycenter - node.pos) * strength;
            }
        }
    }

    // --- integration ---

    /// Movement cap for the current iteration: the start temperature cooled
    /// linearly to zero over `max_iterations`, bounded by `max_speed`.
    fn temperature(&self, n_active: usize) -> f64 {
        let start = (n_active as f64).sqrt();
        let max = f64::from(self.options.max_iterations.max(1));
        let cooled = start * (1.0 - f64::from(self.iteration.min(self.options.max_iterations)) / max);
        cooled.min(self.options.max_speed).max(0.0)
    }

    fn integrate(&mut self, n_active: usize) {
        let limit = self.temperature(n_active);
        let friction = self.options.friction;
        let integrator = self.options.integrator;
        let mut total_sq = 0.0;
        for node in &mut self.nodes {
            if !node.is_active() {
                continue;
            }
            if node.flags.contains(NodeFlags::FIXED) {
                node.prev = node.pos;
                node.vel = Vec2::ZERO;
                continue;
            }
            let step = match integrator {
                Integrator::Euler => {
                    node.vel = node.vel * friction + node.disp;
                    clamp_length(node.vel, limit)
                }
                Integrator::Verlet => {
                    let inertia = (node.pos - node.prev) * friction;
                    node.prev = node.pos;
                    clamp_length(inertia + node.disp, limit)
                }
            };
            node.pos += step;
            node.pos.x = node.pos.x.clamp(self.plot.x0, self.plot.x1);
            node.pos.y = node.pos.y.clamp(self.plot.y0, self.plot.y1);
            total_sq += step.hypot2();
        }
        self.last_displacement = total_sq / n_active as f64;
    }
}

/// Repulsion `mass * k^2 / d` on `pos` away from `from`, as a displacement
/// vector. Zero when the points coincide.
fn repulsion(pos: Point, from: Point, mass: f64, k: f64) -> Vec2 {
    let delta = pos - from;
    let d = delta.hypot();
    if d == 0.0 {
        return Vec2::ZERO;
    }
    delta * (mass * k * k / (d * d))
}

/// Barnes-Hut traversal: accumulate the repulsion a single node receives
/// from the subtree rooted at `cell`.
///
/// An internal cell whose width over distance-to-centroid is below `theta`
/// stands in for its whole subtree as a point mass at the running centroid;
/// otherwise the quadrants are visited. Leaves contribute exact pairwise
/// repulsion, skipping the node itself by payload.
fn repulsion_from_cell(pos: Point, self_ix: u32, cell: &QuadTreeNode<u32>, k: f64, theta: f64) -> Vec2 {
    match cell.quadrants() {
        Some(quadrants) => {
            let Some((cx, cy)) = cell.center() else {
                return Vec2::ZERO;
            };
            let center = Point::new(cx, cy);
            let d = (pos - center).hypot();
            if d != 0.0 && cell.rect().width / d < theta {
                repulsion(pos, center, cell.mass() as f64, k)
            } else {
                let mut disp = Vec2::ZERO;
                for q in quadrants.iter() {
                    disp += repulsion_from_cell(pos, self_ix, q, k, theta);
                }
                disp
            }
        }
        None => {
            let mut disp = Vec2::ZERO;
            for p in cell.points() {
                if p.payload == self_ix {
                    continue;
                }
                disp += repulsion(pos, Point::new(p.x, p.y), 1.0, k);
            }
            disp
        }
    }
}

/// Reproducible stand-in for a uniform random draw in `[0, 1)`: the
/// fractional part of `i^2 / pi`. Adjacent indices decorrelate quickly and
/// the same index always yields the same value.
fn unrandom(ix: usize) -> f64 {
    let r = (ix as f64) * (ix as f64) / PI;
    r - r.floor()
}

fn clamp_length(v: Vec2, limit: f64) -> Vec2 {
    let d = v.hypot();
    if d > limit && d > 0.0 {
        v * (limit / d)
    } else {
        v
    }
}
