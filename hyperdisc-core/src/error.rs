//! Error types for the hyperdisc core library.
//!
//! Defines the error enum exposed by the public API, its stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when constructing a [`crate::HyperbolicNetwork`] or
/// generating a graph from one.
///
/// All parameter-validation variants are raised by
/// [`crate::NetworkBuilder::build`] before any sampling takes place, so a
/// failed construction never leaves a partial network behind.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NetworkError {
    /// At least two nodes are required to form a pair.
    #[error("node count must be at least 2 (got {got})")]
    InvalidNodeCount {
        /// The invalid node count supplied by the caller.
        got: usize,
    },
    /// The target power-law exponent must exceed 1 for the radial density to
    /// decay.
    #[error("power-law exponent must be finite and greater than 1 (got {got})")]
    InvalidExponent {
        /// The invalid exponent supplied by the caller.
        got: f64,
    },
    /// The target mean degree must be positive.
    #[error("target mean degree must be finite and positive (got {got})")]
    InvalidMeanDegree {
        /// The invalid mean degree supplied by the caller.
        got: f64,
    },
    /// The curvature parameter must be positive.
    #[error("curvature parameter zeta must be finite and positive (got {got})")]
    InvalidCurvature {
        /// The invalid curvature supplied by the caller.
        got: f64,
    },
    /// The Fermi-Dirac inverse temperature must be finite and non-negative.
    #[error("inverse temperature beta must be finite and non-negative (got {got})")]
    InvalidTemperature {
        /// The invalid inverse temperature supplied by the caller.
        got: f64,
    },
    /// The derived disk radius was non-finite or non-positive, so the radial
    /// density cannot be sampled. Typically caused by a mean-degree target
    /// too large for the node count, or by `gamma = 2` under the exact model.
    #[error("derived disk radius {radius} admits no radial distribution")]
    DegenerateRadius {
        /// The unusable disk radius derived from the parameters.
        radius: f64,
    },
    /// A pairwise distance evaluated to NaN despite the documented clamps.
    /// This is a defensive assertion and is not expected to trigger.
    #[error("distance between nodes {i} and {j} is not a number")]
    NonFiniteDistance {
        /// First node of the offending pair.
        i: usize,
        /// Second node of the offending pair.
        j: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`NetworkError`] variants.
    enum NetworkErrorCode for NetworkError {
        /// At least two nodes are required to form a pair.
        InvalidNodeCount => InvalidNodeCount { .. } => "NETWORK_INVALID_NODE_COUNT",
        /// The target power-law exponent must exceed 1.
        InvalidExponent => InvalidExponent { .. } => "NETWORK_INVALID_EXPONENT",
        /// The target mean degree must be positive.
        InvalidMeanDegree => InvalidMeanDegree { .. } => "NETWORK_INVALID_MEAN_DEGREE",
        /// The curvature parameter must be positive.
        InvalidCurvature => InvalidCurvature { .. } => "NETWORK_INVALID_CURVATURE",
        /// The Fermi-Dirac inverse temperature must be finite and non-negative.
        InvalidTemperature => InvalidTemperature { .. } => "NETWORK_INVALID_TEMPERATURE",
        /// The derived disk radius admits no radial distribution.
        DegenerateRadius => DegenerateRadius { .. } => "NETWORK_DEGENERATE_RADIUS",
        /// A pairwise distance evaluated to NaN despite the documented clamps.
        NonFiniteDistance => NonFiniteDistance { .. } => "NETWORK_NON_FINITE_DISTANCE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, NetworkError>;
