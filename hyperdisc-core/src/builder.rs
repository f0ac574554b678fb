//! Builder utilities for configuring hyperbolic network generation.
//!
//! Exposes the distance-model and connection-rule selection surface and the
//! parameter validation performed before constructing
//! [`HyperbolicNetwork`] instances.

use std::f64::consts::PI;

use crate::{
    Result,
    error::NetworkError,
    network::HyperbolicNetwork,
};

/// Selects how pairwise hyperbolic distances are computed.
///
/// Each model binds its own disk-radius formula. The two formulas calibrate
/// the realised mean degree against the target for their respective distance
/// laws and are not interchangeable, so the radius is never configurable on
/// its own.
///
/// # Examples
/// ```
/// use hyperdisc_core::DistanceModel;
///
/// let model = DistanceModel::Exact;
/// assert!(matches!(model, DistanceModel::Exact));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DistanceModel {
    /// Exact hyperbolic law of cosines, with the radius
    /// `L = 2·ln((2N/(π·k̄))·((γ−1)/(γ−2))²)`.
    #[default]
    Exact,
    /// Large-radius approximation `x = rᵢ + rⱼ + (2/ζ)·ln(Δθ/2)`, with the
    /// radius `L = (2/ζ)·ln(8N/(π·k̄))`.
    LargeRadius,
}

/// Decides whether a node pair at hyperbolic distance `x` is connected.
///
/// Orthogonal to [`DistanceModel`]; any pairing is accepted.
///
/// # Examples
/// ```
/// use hyperdisc_core::ConnectionRule;
///
/// let soft = ConnectionRule::FermiDirac { beta: 2.0 };
/// assert!(matches!(soft, ConnectionRule::FermiDirac { .. }));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ConnectionRule {
    /// Deterministic step rule: connect iff `x <= L`. This is the infinite
    /// inverse-temperature limit of [`ConnectionRule::FermiDirac`] and
    /// consumes no randomness.
    #[default]
    Threshold,
    /// Probabilistic rule with connection probability
    /// `p = 1 / (exp(beta·(x − L)/2) + 1)`. `beta = 0` yields `p = 0.5` for
    /// every pair regardless of geometry.
    FermiDirac {
        /// Inverse temperature controlling how sharply the probability drops
        /// around the disk radius. Must be finite and non-negative.
        beta: f64,
    },
}

impl ConnectionRule {
    /// Returns the connection probability for a pair at hyperbolic distance
    /// `x` in a disk of radius `radius`.
    ///
    /// The threshold rule is the step function `x <= radius`; the
    /// Fermi-Dirac rule decreases monotonically in `x` and crosses `0.5`
    /// exactly at the disk radius.
    ///
    /// # Examples
    /// ```
    /// use hyperdisc_core::ConnectionRule;
    ///
    /// let hard = ConnectionRule::Threshold;
    /// assert_eq!(hard.connection_probability(3.0, 5.0), 1.0);
    /// assert_eq!(hard.connection_probability(7.0, 5.0), 0.0);
    ///
    /// let soft = ConnectionRule::FermiDirac { beta: 2.0 };
    /// assert!((soft.connection_probability(5.0, 5.0) - 0.5).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn connection_probability(self, x: f64, radius: f64) -> f64 {
        match self {
            Self::Threshold => {
                if x <= radius {
                    1.0
                } else {
                    0.0
                }
            }
            Self::FermiDirac { beta } => 1.0 / ((beta * (x - radius) / 2.0).exp() + 1.0),
        }
    }
}

/// Configures and constructs [`HyperbolicNetwork`] instances.
///
/// # Examples
/// ```
/// use hyperdisc_core::{ConnectionRule, DistanceModel, NetworkBuilder};
///
/// let network = NetworkBuilder::new(100, 2.5, 4.0)
///     .with_distance_model(DistanceModel::LargeRadius)
///     .with_connection_rule(ConnectionRule::Threshold)
///     .with_seed(7)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(network.node_count(), 100);
/// assert!(network.radius() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    nodes: usize,
    gamma: f64,
    mean_degree: f64,
    zeta: f64,
    seed: u64,
    distance_model: DistanceModel,
    connection_rule: ConnectionRule,
}

impl NetworkBuilder {
    /// Creates a builder for a network of `nodes` nodes targeting power-law
    /// exponent `gamma` and mean degree `mean_degree`.
    ///
    /// Curvature defaults to `zeta = 1.0`, the distance model to
    /// [`DistanceModel::Exact`], the connection rule to
    /// [`ConnectionRule::Threshold`], and the seed to `0`.
    #[must_use]
    pub fn new(nodes: usize, gamma: f64, mean_degree: f64) -> Self {
        Self {
            nodes,
            gamma,
            mean_degree,
            zeta: 1.0,
            seed: 0,
            distance_model: DistanceModel::default(),
            connection_rule: ConnectionRule::default(),
        }
    }

    /// Overrides the curvature parameter `zeta`.
    #[must_use]
    pub fn with_zeta(mut self, zeta: f64) -> Self {
        self.zeta = zeta;
        self
    }

    /// Overrides the seed for the generator's random stream.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Selects the distance model (and thereby the disk-radius formula).
    #[must_use]
    pub fn with_distance_model(mut self, model: DistanceModel) -> Self {
        self.distance_model = model;
        self
    }

    /// Selects the connection rule.
    #[must_use]
    pub fn with_connection_rule(mut self, rule: ConnectionRule) -> Self {
        self.connection_rule = rule;
        self
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

    /// Validates the configuration, derives the radial decay rate and disk
    /// radius, and constructs a [`HyperbolicNetwork`].
    ///
    /// # Errors
    /// Returns [`NetworkError::InvalidNodeCount`] for fewer than two nodes,
    /// [`NetworkError::InvalidExponent`] when `gamma <= 1`,
    /// [`NetworkError::InvalidMeanDegree`] and
    /// [`NetworkError::InvalidCurvature`] for non-positive targets,
    /// [`NetworkError::InvalidTemperature`] for a non-finite or negative
    /// Fermi-Dirac `beta`, and [`NetworkError::DegenerateRadius`] when the
    /// derived disk radius admits no radial distribution.
    ///
    /// # Examples
    /// ```
    /// use hyperdisc_core::{NetworkBuilder, NetworkError};
    ///
    /// let err = NetworkBuilder::new(50, 1.0, 2.5)
    ///     .build()
    ///     .expect_err("gamma = 1 must be rejected");
    /// assert!(matches!(err, NetworkError::InvalidExponent { .. }));
    /// ```
    pub fn build(self) -> Result<HyperbolicNetwork> {
        if self.nodes < 2 {
            return Err(NetworkError::InvalidNodeCount { got: self.nodes });
        }
        if !self.gamma.is_finite() || self.gamma <= 1.0 {
            return Err(NetworkError::InvalidExponent { got: self.gamma });
        }
        if !self.mean_degree.is_finite() || self.mean_degree <= 0.0 {
            return Err(NetworkError::InvalidMeanDegree {
                got: self.mean_degree,
            });
        }
        if !self.zeta.is_finite() || self.zeta <= 0.0 {
            return Err(NetworkError::InvalidCurvature { got: self.zeta });
        }
        if let ConnectionRule::FermiDirac { beta } = self.connection_rule {
            if !beta.is_finite() || beta < 0.0 {
                return Err(NetworkError::InvalidTemperature { got: beta });
            }
        }

        let alpha = (self.gamma - 1.0) * self.zeta / 2.0;
        let radius = self.disk_radius();
        if !radius.is_finite() || radius <= 0.0 {
            return Err(NetworkError::DegenerateRadius { radius });
        }
        // The inverse-CDF sampler evaluates cosh(alpha * L); if that already
        // overflows f64 no radial coordinate can be drawn.
        if !(alpha * radius).cosh().is_finite() {
            return Err(NetworkError::DegenerateRadius { radius });
        }

        Ok(HyperbolicNetwork::new(
            self.nodes,
            self.gamma,
            self.mean_degree,
            self.zeta,
            alpha,
            radius,
            self.seed,
            self.distance_model,
            self.connection_rule,
        ))
    }

    fn disk_radius(&self) -> f64 {
        #[expect(
            clippy::cast_precision_loss,
            reason = "node counts sit far below 2^52"
        )]
        let n = self.nodes as f64;
        match self.distance_model {
            DistanceModel::Exact => {
                let ratio = (self.gamma - 1.0) / (self.gamma - 2.0);
                2.0 * ((2.0 * n / (PI * self.mean_degree)) * ratio * ratio).ln()
            }
            DistanceModel::LargeRadius => {
                (2.0 / self.zeta) * (8.0 * n / (PI * self.mean_degree)).ln()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::zero_nodes(0)]
    #[case::single_node(1)]
    fn build_rejects_undersized_networks(#[case] nodes: usize) {
        let err = NetworkBuilder::new(nodes, 2.5, 2.0)
            .build()
            .expect_err("builder must reject fewer than two nodes");
        assert!(matches!(err, NetworkError::InvalidNodeCount { got } if got == nodes));
    }

    #[rstest]
    #[case::below_one(0.5)]
    #[case::exactly_one(1.0)]
    #[case::nan(f64::NAN)]
    fn build_rejects_invalid_exponents(#[case] gamma: f64) {
        let err = NetworkBuilder::new(10, gamma, 2.0)
            .build()
            .expect_err("builder must reject gamma <= 1");
        assert!(matches!(err, NetworkError::InvalidExponent { .. }));
    }

    #[rstest]
    #[case::negative(-1.0)]
    #[case::zero(0.0)]
    #[case::infinite(f64::INFINITY)]
    fn build_rejects_invalid_mean_degrees(#[case] mean_degree: f64) {
        let err = NetworkBuilder::new(10, 2.5, mean_degree)
            .build()
            .expect_err("builder must reject non-positive mean degree");
        assert!(matches!(err, NetworkError::InvalidMeanDegree { .. }));
    }

    #[test]
    fn build_rejects_non_positive_curvature() {
        let err = NetworkBuilder::new(10, 2.5, 2.0)
            .with_zeta(0.0)
            .build()
            .expect_err("builder must reject zeta = 0");
        assert!(matches!(err, NetworkError::InvalidCurvature { .. }));
    }

    #[rstest]
    #[case::negative(-0.5)]
    #[case::infinite(f64::INFINITY)]
    #[case::nan(f64::NAN)]
    fn build_rejects_invalid_temperatures(#[case] beta: f64) {
        let err = NetworkBuilder::new(10, 2.5, 2.0)
            .with_connection_rule(ConnectionRule::FermiDirac { beta })
            .build()
            .expect_err("builder must reject unusable beta");
        assert!(matches!(err, NetworkError::InvalidTemperature { .. }));
    }

    #[test]
    fn exact_model_rejects_gamma_two_radius() {
        // (gamma - 1)/(gamma - 2) diverges at gamma = 2, so the exact-model
        // radius is infinite and the configuration must fail.
        let err = NetworkBuilder::new(10, 2.0, 2.0)
            .with_distance_model(DistanceModel::Exact)
            .build()
            .expect_err("gamma = 2 must produce a degenerate exact radius");
        assert!(matches!(err, NetworkError::DegenerateRadius { .. }));
    }

    #[test]
    fn large_radius_model_rejects_oversized_mean_degree() {
        // 8N/(pi * k_bar) <= 1 drives the radius non-positive.
        let err = NetworkBuilder::new(2, 2.5, 100.0)
            .with_distance_model(DistanceModel::LargeRadius)
            .build()
            .expect_err("radius must be positive");
        assert!(matches!(err, NetworkError::DegenerateRadius { radius } if radius <= 0.0));
    }

    #[test]
    fn radius_formula_tracks_distance_model() {
        let exact = NetworkBuilder::new(100, 2.5, 2.5)
            .build()
            .expect("exact configuration is valid");
        let approx = NetworkBuilder::new(100, 2.5, 2.5)
            .with_distance_model(DistanceModel::LargeRadius)
            .build()
            .expect("approximate configuration is valid");

        let n = 100.0_f64;
        let expected_exact =
            2.0 * ((2.0 * n / (std::f64::consts::PI * 2.5)) * 3.0 * 3.0).ln();
        let expected_approx = 2.0 * (8.0 * n / (std::f64::consts::PI * 2.5)).ln();
        assert!((exact.radius() - expected_exact).abs() < 1e-12);
        assert!((approx.radius() - expected_approx).abs() < 1e-12);
    }
}
