//! Exact hyperbolic distance via the law of cosines.

/// Computes the exact hyperbolic distance between two points given their
/// radial coordinates and angular separation.
///
/// The `acosh` argument is clamped to a minimum of `1.0` before evaluation:
/// for nearly coincident points the expression
/// `cosh(rᵢ)·cosh(rⱼ) − sinh(rᵢ)·sinh(rⱼ)·cos(Δθ)` can underflow slightly
/// below 1, where `acosh` is undefined. The clamp is a numerical-stability
/// guard, not a modelling choice.
///
/// # Examples
/// ```
/// use hyperdisc_core::law_of_cosines_distance;
///
/// // Coincident points are at distance zero.
/// assert_eq!(law_of_cosines_distance(3.0, 3.0, 0.0), 0.0);
/// // Diametrically opposed points are roughly 2r apart for large r.
/// let far = law_of_cosines_distance(5.0, 5.0, std::f64::consts::PI);
/// assert!((far - 10.0).abs() < 1.0);
/// ```
#[must_use]
pub fn law_of_cosines_distance(r_i: f64, r_j: f64, delta_theta: f64) -> f64 {
    let argument = r_i.cosh() * r_j.cosh() - r_i.sinh() * r_j.sinh() * delta_theta.cos();
    argument.max(1.0).acosh()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_separation_equal_radii_is_zero() {
        // cosh²(r) - sinh²(r) = 1 exactly, so the clamp keeps this at zero.
        assert_eq!(law_of_cosines_distance(7.5, 7.5, 0.0), 0.0);
    }

    #[test]
    fn collinear_points_differ_by_radial_gap() {
        let distance = law_of_cosines_distance(2.0, 5.0, 0.0);
        assert!((distance - 3.0).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = law_of_cosines_distance(1.2, 4.3, 0.7);
        let ba = law_of_cosines_distance(4.3, 1.2, 0.7);
        assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn underflow_below_one_is_clamped() {
        // Tiny radii and separation can push the argument below 1 through
        // rounding; the clamp must keep acosh defined.
        let distance = law_of_cosines_distance(1e-9, 1e-9, 1e-12);
        assert!(distance.is_finite());
        assert!(distance >= 0.0);
    }
}
