//! Generated-graph types returned by [`crate::HyperbolicNetwork::generate`].
//!
//! A [`HyperbolicGraph`] is immutable after construction: coordinates, edges,
//! and degrees are derived once, in that order, and the accessors hand out
//! borrowed views only.

use crate::{projection::project, topology::TopologyReport};

/// Native hyperbolic coordinates of a single node.
///
/// # Examples
/// ```
/// use hyperdisc_core::NodeCoordinates;
///
/// let node = NodeCoordinates { r: 3.5, theta: 1.2 };
/// assert!(node.r > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeCoordinates {
    /// Radial coordinate in `[0, L]`.
    pub r: f64,
    /// Angular coordinate in `[0, 2π)`.
    pub theta: f64,
}

/// An immutable graph realised in hyperbolic space.
///
/// Node identity is positional: index `v` into [`Self::nodes`] and
/// [`Self::degrees`] refers to the same node everywhere, and edges store
/// index pairs with the smaller index first.
#[derive(Debug, Clone, PartialEq)]
pub struct HyperbolicGraph {
    nodes: Vec<NodeCoordinates>,
    edges: Vec<(u32, u32)>,
    degrees: Vec<usize>,
}

impl HyperbolicGraph {
    pub(crate) fn new(nodes: Vec<NodeCoordinates>, edges: Vec<(u32, u32)>) -> Self {
        let mut degrees = vec![0_usize; nodes.len()];
        for &(i, j) in &edges {
            degrees[i as usize] += 1;
            degrees[j as usize] += 1;
        }
        Self {
            nodes,
            edges,
            degrees,
        }
    }

    /// Returns the node coordinates, indexed by node id.
    #[must_use]
    pub fn nodes(&self) -> &[NodeCoordinates] {
        &self.nodes
    }

    /// Returns the edge list as `(i, j)` pairs with `i < j`, ordered by `i`
    /// ascending then `j` ascending.
    #[must_use]
    pub fn edges(&self) -> &[(u32, u32)] {
        &self.edges
    }

    /// Returns the degree sequence, aligned to node id.
    #[must_use]
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the realised mean degree, `2|E|/N`.
    #[must_use]
    pub fn mean_degree(&self) -> f64 {
        #[expect(
            clippy::cast_precision_loss,
            reason = "graph sizes sit far below 2^52"
        )]
        let mean = 2.0 * self.edges.len() as f64 / self.nodes.len() as f64;
        mean
    }

    /// Projects every node into the Poincaré disk, preserving node order.
    ///
    /// # Examples
    /// ```
    /// use hyperdisc_core::NetworkBuilder;
    ///
    /// let graph = NetworkBuilder::new(30, 2.5, 2.0)
    ///     .build()?
    ///     .generate()?;
    /// for (x, y) in graph.projected_nodes() {
    ///     assert!(x * x + y * y < 1.0);
    /// }
    /// # Ok::<(), hyperdisc_core::NetworkError>(())
    /// ```
    #[must_use]
    pub fn projected_nodes(&self) -> Vec<(f64, f64)> {
        self.nodes
            .iter()
            .map(|node| project(node.r, node.theta))
            .collect()
    }

    /// Computes the advisory topology summary for this graph.
    ///
    /// The report never fails: statistics that need more structure than the
    /// graph offers (the power-law fit, the clustering mean) degrade to
    /// `None` instead.
    #[must_use]
    pub fn topology_report(&self) -> TopologyReport {
        TopologyReport::from_graph(self)
    }
}
