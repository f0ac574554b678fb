//! Pairwise hyperbolic distance primitives.
//!
//! Two distance laws are exposed: the exact hyperbolic law of cosines and the
//! large-radius approximation used by the threshold variant of the model.
//! Both routines clamp their arguments so that floating-point underflow never
//! produces an undefined `acosh` or `ln`; the clamps are part of the contract
//! and callers rely on the results being NaN-free for finite coordinates.

mod approx;
mod exact;
mod helpers;

pub use self::approx::large_radius_distance;
pub use self::exact::law_of_cosines_distance;
pub use self::helpers::angular_separation;
