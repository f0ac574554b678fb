//! Hyperbolic random graph generation entry point.
//!
//! Provides the [`HyperbolicNetwork`] runtime entry point which owns the
//! validated model parameters and derives coordinates, edges, and degrees in
//! order from a seeded random stream.

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{info, instrument};

use crate::{
    Result,
    builder::{ConnectionRule, DistanceModel},
    edges::PairEvaluation,
    graph::HyperbolicGraph,
    sampler::sample_coordinates,
};

/// A validated hyperbolic random graph model.
///
/// Instances are immutable; [`Self::generate`] is a pure function of the
/// stored parameters and seed, so repeated calls return identical graphs.
///
/// # Examples
/// ```
/// use hyperdisc_core::NetworkBuilder;
///
/// let network = NetworkBuilder::new(60, 2.5, 2.5)
///     .with_seed(11)
///     .build()
///     .expect("parameters are valid");
/// let graph = network.generate().expect("generation must succeed");
/// assert_eq!(graph.node_count(), 60);
/// let degree_sum: usize = graph.degrees().iter().sum();
/// assert_eq!(degree_sum, 2 * graph.edge_count());
/// ```
#[derive(Debug, Clone)]
pub struct HyperbolicNetwork {
    nodes: usize,
    gamma: f64,
    mean_degree: f64,
    zeta: f64,
    alpha: f64,
    radius: f64,
    seed: u64,
    distance_model: DistanceModel,
    connection_rule: ConnectionRule,
}

impl HyperbolicNetwork {
    #[expect(
        clippy::too_many_arguments,
        reason = "crate-private constructor invoked only by the validating builder"
    )]
    pub(crate) fn new(
        nodes: usize,
        gamma: f64,
        mean_degree: f64,
        zeta: f64,
        alpha: f64,
        radius: f64,
        seed: u64,
        distance_model: DistanceModel,
        connection_rule: ConnectionRule,
    ) -> Self {
        Self {
            nodes,
            gamma,
            mean_degree,
            zeta,
            alpha,
            radius,
            seed,
            distance_model,
            connection_rule,
        }
    }

    /// Returns the node count `N`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Returns the target power-law exponent `gamma`.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns the target mean degree `k̄`.
    #[must_use]
    pub fn mean_degree_target(&self) -> f64 {
        self.mean_degree
    }

    /// Returns the curvature parameter `zeta`.
    #[must_use]
    pub fn zeta(&self) -> f64 {
        self.zeta
    }

    /// Returns the derived radial decay rate `alpha = (gamma − 1)·zeta/2`.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the derived disk radius `L`, bound to the distance model.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the seed of the generator's random stream.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the configured distance model.
    #[must_use]
    pub fn distance_model(&self) -> DistanceModel {
        self.distance_model
    }

    /// Returns the configured connection rule.
    #[must_use]
    pub fn connection_rule(&self) -> ConnectionRule {
        self.connection_rule
    }

    /// Samples coordinates, evaluates every node pair, and returns the
    /// realised graph.
    ///
    /// # Errors
    /// Returns [`crate::NetworkError::NonFiniteDistance`] if a pairwise
    /// distance evaluates to NaN; the documented clamps make this a
    /// defensive assertion rather than an expected outcome.
    #[instrument(
        name = "network.generate",
        err,
        skip(self),
        fields(
            nodes = self.nodes,
            seed = self.seed,
            model = ?self.distance_model,
            rule = ?self.connection_rule,
        ),
    )]
    pub fn generate(&self) -> Result<HyperbolicGraph> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let coords = sample_coordinates(self.nodes, self.alpha, self.radius, &mut rng);

        let evaluation = PairEvaluation {
            coords: &coords,
            radius: self.radius,
            zeta: self.zeta,
            seed: self.seed,
            model: self.distance_model,
            rule: self.connection_rule,
        };
        let edges = evaluation.build_edges()?;

        let graph = HyperbolicGraph::new(coords, edges);
        info!(
            edges = graph.edge_count(),
            mean_degree = graph.mean_degree(),
            "generation completed"
        );
        Ok(graph)
    }
}
