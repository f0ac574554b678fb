//! Shared helpers for the distance laws.

use std::f64::consts::TAU;

/// Returns the angular separation between two angles in `[0, 2π)`.
///
/// The separation is taken around the shorter arc, so the result lies in
/// `[0, π]`.
///
/// # Examples
/// ```
/// use hyperdisc_core::angular_separation;
///
/// let sep = angular_separation(0.1, std::f64::consts::TAU - 0.1);
/// assert!((sep - 0.2).abs() < 1e-12);
/// ```
#[must_use]
pub fn angular_separation(theta_i: f64, theta_j: f64) -> f64 {
    let gap = (theta_i - theta_j).abs();
    gap.min(TAU - gap)
}
