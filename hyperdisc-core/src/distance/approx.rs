//! Large-radius approximation of the hyperbolic distance.

/// Floor applied to the angular separation so `ln` never sees zero.
const MIN_ANGULAR_SEPARATION: f64 = 1e-10;

/// Computes the large-radius approximation
/// `x = rᵢ + rⱼ + (2/ζ)·ln(Δθ/2)`.
///
/// Accurate when both points sit far from the disk centre, which is where
/// the radial density concentrates. `delta_theta` is floored at `1e-10`
/// before the logarithm so angularly coincident nodes yield a large negative
/// correction instead of `-inf`.
///
/// # Examples
/// ```
/// use hyperdisc_core::large_radius_distance;
///
/// let x = large_radius_distance(6.0, 6.0, 2.0, 1.0);
/// assert!((x - 12.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn large_radius_distance(r_i: f64, r_j: f64, delta_theta: f64, zeta: f64) -> f64 {
    let separation = delta_theta.max(MIN_ANGULAR_SEPARATION);
    r_i + r_j + (2.0 / zeta) * (separation / 2.0).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_with_angular_separation() {
        let near = large_radius_distance(5.0, 5.0, 0.1, 1.0);
        let far = large_radius_distance(5.0, 5.0, 1.0, 1.0);
        assert!(far > near);
    }

    #[test]
    fn zero_separation_is_floored() {
        let x = large_radius_distance(5.0, 5.0, 0.0, 1.0);
        assert!(x.is_finite());
        let floored = large_radius_distance(5.0, 5.0, 1e-10, 1.0);
        assert!((x - floored).abs() < 1e-12);
    }

    #[test]
    fn curvature_scales_the_correction() {
        let base = large_radius_distance(4.0, 4.0, 0.5, 1.0);
        let curved = large_radius_distance(4.0, 4.0, 0.5, 2.0);
        // The logarithmic term halves when zeta doubles; ln(0.25) < 0 so the
        // curved distance is larger.
        assert!(curved > base);
        let correction = (0.25_f64).ln();
        assert!((base - (8.0 + 2.0 * correction)).abs() < 1e-12);
        assert!((curved - (8.0 + correction)).abs() < 1e-12);
    }
}
