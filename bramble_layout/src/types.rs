// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the layout: node identifiers, flags, and options.

use bitflags::bitflags;

/// Identifier for a node in the layout graph.
///
/// The graph is append-only for the lifetime of a simulation (nodes are
/// never removed mid-run; a changed graph gets a fresh layout), so this is
/// a plain index with no generation counter.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "NodeId uses 32-bit indices by design."
    )]
    pub(crate) const fn new(ix: usize) -> Self {
        Self(ix as u32)
    }

    pub(crate) const fn ix(self) -> usize {
        self.0 as usize
    }
}

bitflags! {
    /// Node flags controlling simulation participation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node participates in the simulation. Inactive nodes neither move
        /// nor exert forces.
        const ACTIVE = 0b0000_0001;
        /// Node position is pinned: it still repels and attracts others but
        /// does not move. This is the hook a drag interaction uses.
        const FIXED  = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::ACTIVE
    }
}

/// Numerical integrator applied to the accumulated forces each iteration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Integrator {
    /// Damped velocity accumulation stepped directly by the force field.
    #[default]
    Euler,
    /// Position extrapolation from the previous position with friction,
    /// over the same force field.
    Verlet,
}

/// Strategy for the repulsive-force pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Approximation {
    /// Cluster distant nodes through a quad-tree (Barnes-Hut), trading a
    /// small error bound (`theta`) for O(n log n) work.
    #[default]
    BarnesHut,
    /// Exact all-pairs repulsion, O(n^2). Useful as a reference and for
    /// small graphs.
    Exact,
}

/// Deterministic initial placement of nodes.
///
/// Both placements are reproducible: laying out the same graph twice gives
/// identical starting positions, and therefore identical iterations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    /// Evenly spaced on a circle centered in the plot rectangle.
    #[default]
    Circle,
    /// Pseudo-random scatter over the plot rectangle, derived from the
    /// fractional part of `i^2 / pi` per node index. No RNG state.
    Scatter,
}

/// Tunables for [`ForceLayout`](crate::ForceLayout).
#[derive(Copy, Clone, Debug)]
pub struct LayoutOptions {
    /// Barnes-Hut opening threshold: an internal cell is treated as a single
    /// point mass when `cell_width / distance < theta`. Smaller is more
    /// exact; `0.0` degenerates to all-pairs.
    pub theta: f64,
    /// Velocity damping per iteration, in `0..=1`.
    pub friction: f64,
    /// Upper bound on per-iteration node movement, in plot units.
    pub max_speed: f64,
    /// Pull toward the graph barycenter, keeping disconnected components on
    /// the plot. Zero disables gravity.
    pub gravity: f64,
    /// Ideal link length `k`. `None` derives `sqrt(plot_area / n)`.
    pub link_length: Option<f64>,
    /// Hard iteration cap for [`ForceLayout::run`](crate::ForceLayout::run);
    /// also the horizon over which the temperature cools to zero.
    pub max_iterations: u32,
    /// The simulation counts as stable once the mean squared displacement
    /// per active node falls below this.
    pub stability_threshold: f64,
    /// Integrator for the accumulated forces.
    pub integrator: Integrator,
    /// Repulsion strategy.
    pub approximation: Approximation,
    /// Initial placement applied by [`ForceLayout::place`](crate::ForceLayout::place).
    pub placement: Placement,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            theta: 0.5,
            friction: 0.98,
            max_speed: 10.0,
            gravity: 0.0625,
            link_length: None,
            max_iterations: 1000,
            stability_threshold: 1e-5,
            integrator: Integrator::default(),
            approximation: Approximation::default(),
            placement: Placement::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_are_active_unpinned() {
        let flags = NodeFlags::default();
        assert!(flags.contains(NodeFlags::ACTIVE));
        assert!(!flags.contains(NodeFlags::FIXED));
    }

    #[test]
    fn default_options_are_barnes_hut_euler() {
        let options = LayoutOptions::default();
        assert_eq!(options.approximation, Approximation::BarnesHut);
        assert_eq!(options.integrator, Integrator::Euler);
        assert!(options.theta > 0.0);
        assert!(options.friction > 0.0 && options.friction <= 1.0);
    }
}
