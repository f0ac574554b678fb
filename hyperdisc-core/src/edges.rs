//! Exhaustive pairwise edge construction.
//!
//! Every unordered node pair is evaluated once, `i` ascending then `j > i`
//! ascending. Rows are farmed out across the rayon pool and the per-row edge
//! lists are merged back in row order, so the resulting edge list is
//! identical regardless of thread count. The soft rule's uniform draw is
//! derived from the pair's linear index rather than a shared sequential
//! stream for the same reason.

use rayon::prelude::*;

use crate::{
    Result,
    builder::{ConnectionRule, DistanceModel},
    distance::{angular_separation, large_radius_distance, law_of_cosines_distance},
    error::NetworkError,
    graph::NodeCoordinates,
};

/// SplitMix64 increment (the 64-bit golden ratio) used for per-pair seed
/// derivation.
const PAIR_SEED_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

/// Inputs shared by every pair evaluation.
pub(crate) struct PairEvaluation<'a> {
    pub(crate) coords: &'a [NodeCoordinates],
    pub(crate) radius: f64,
    pub(crate) zeta: f64,
    pub(crate) seed: u64,
    pub(crate) model: DistanceModel,
    pub(crate) rule: ConnectionRule,
}

impl PairEvaluation<'_> {
    /// Evaluates every unordered pair and returns the realised edge list.
    ///
    /// # Errors
    /// Returns [`NetworkError::NonFiniteDistance`] if a distance evaluates to
    /// NaN despite the clamps in the distance laws.
    pub(crate) fn build_edges(&self) -> Result<Vec<(u32, u32)>> {
        let n = self.coords.len();
        let rows: Vec<Vec<(u32, u32)>> = (0..n)
            .into_par_iter()
            .map(|i| self.evaluate_row(i))
            .collect::<Result<_>>()?;
        Ok(rows.into_iter().flatten().collect())
    }

    fn evaluate_row(&self, i: usize) -> Result<Vec<(u32, u32)>> {
        let n = self.coords.len();
        let mut row = Vec::new();
        for j in (i + 1)..n {
            let x = self.distance(i, j);
            if x.is_nan() {
                return Err(NetworkError::NonFiniteDistance { i, j });
            }
            if self.connects(i, j, x) {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "node counts fit u32 at the scales this model targets"
                )]
                row.push((i as u32, j as u32));
            }
        }
        Ok(row)
    }

    fn distance(&self, i: usize, j: usize) -> f64 {
        let a = self.coords[i];
        let b = self.coords[j];
        let delta_theta = angular_separation(a.theta, b.theta);
        match self.model {
            DistanceModel::Exact => law_of_cosines_distance(a.r, b.r, delta_theta),
            DistanceModel::LargeRadius => {
                large_radius_distance(a.r, b.r, delta_theta, self.zeta)
            }
        }
    }

    fn connects(&self, i: usize, j: usize, x: f64) -> bool {
        match self.rule {
            ConnectionRule::Threshold => x <= self.radius,
            ConnectionRule::FermiDirac { .. } => {
                let probability = self.rule.connection_probability(x, self.radius);
                let u = pair_uniform(self.seed, pair_index(self.coords.len(), i, j));
                u < probability
            }
        }
    }
}

/// Linear index of the unordered pair `(i, j)` in row-major upper-triangle
/// order, matching the evaluation order.
fn pair_index(n: usize, i: usize, j: usize) -> u64 {
    debug_assert!(i < j && j < n);
    let (n, i, j) = (n as u64, i as u64, j as u64);
    i * n - i * (i + 1) / 2 + (j - i - 1)
}

/// Uniform draw in `[0, 1)` derived from the base seed and pair index alone,
/// independent of evaluation order and parallelism.
fn pair_uniform(base_seed: u64, index: u64) -> f64 {
    let bits = splitmix64(base_seed ^ (index + 1).wrapping_mul(PAIR_SEED_SPACING));
    #[expect(
        clippy::cast_precision_loss,
        reason = "the top 53 bits map exactly onto the f64 mantissa"
    )]
    let uniform = (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64);
    uniform
}

fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(PAIR_SEED_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}
