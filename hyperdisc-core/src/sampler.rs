//! Coordinate sampling for the hyperbolic disk.
//!
//! Angles are uniform on `[0, 2π)`; radii follow the density
//! `ρ(r) ∝ sinh(α·r)` on `[0, L]`, drawn through the inverse-CDF transform
//! `r = (1/α)·acosh(1 + u·(cosh(α·L) − 1))`. For `α > 0` the mass
//! concentrates near the rim, which is what produces the degree
//! heterogeneity of the model.

use std::f64::consts::TAU;

use rand::{Rng, distributions::Standard, rngs::SmallRng};

use crate::graph::NodeCoordinates;

/// Draws `count` node coordinates from the sequential random stream.
///
/// Each node consumes exactly two draws (angle, then radial uniform) in node
/// order, so the sampled coordinates are a pure function of the seed.
pub(crate) fn sample_coordinates(
    count: usize,
    alpha: f64,
    radius: f64,
    rng: &mut SmallRng,
) -> Vec<NodeCoordinates> {
    // Finiteness of this span is checked at build time.
    let cosh_span = (alpha * radius).cosh() - 1.0;
    (0..count)
        .map(|_| {
            let theta: f64 = rng.sample::<f64, _>(Standard) * TAU;
            let u: f64 = rng.sample(Standard);
            let r = (1.0 + u * cosh_span).acosh() / alpha;
            NodeCoordinates { r, theta }
        })
        .collect()
}
