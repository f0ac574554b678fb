//! Poincaré disk projection of native hyperbolic coordinates.

/// Maps native `(r, theta)` coordinates onto the Poincaré disk.
///
/// The Euclidean radius is `tanh(r/2)`, so every finite `r` lands strictly
/// inside the unit disk and `r = 0` maps to the origin. The function is
/// stateless; renderers and exporters need nothing else from the core.
///
/// # Examples
/// ```
/// use hyperdisc_core::project;
///
/// let (x, y) = project(0.0, 1.0);
/// assert_eq!((x, y), (0.0, 0.0));
///
/// let (x, y) = project(25.0, 0.0);
/// assert!(x < 1.0 && x > 0.99);
/// assert_eq!(y, 0.0);
/// ```
#[must_use]
pub fn project(r: f64, theta: f64) -> (f64, f64) {
    let r_euclid = (r / 2.0).tanh();
    (r_euclid * theta.cos(), r_euclid * theta.sin())
}
