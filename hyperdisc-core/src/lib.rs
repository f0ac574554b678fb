//! Hyperdisc core library.
//!
//! Generates synthetic random graphs embedded in hyperbolic space: node
//! coordinates are sampled in a hyperbolic disk, every node pair is scored
//! by hyperbolic distance, and edges are realised under either a hard
//! threshold or a temperature-controlled Fermi-Dirac rule. The resulting
//! graph exposes its coordinates, edge list, degree sequence, a Poincaré
//! disk projection, and an advisory topology report through a narrow
//! interface that renderers and exporters consume.
//!
//! Generation is deterministic: for fixed parameters and seed the same graph
//! is produced regardless of how many threads evaluate the pairwise stage.

mod builder;
mod distance;
mod edges;
mod error;
mod graph;
mod network;
mod projection;
mod sampler;
mod topology;

pub use crate::{
    builder::{ConnectionRule, DistanceModel, NetworkBuilder},
    distance::{angular_separation, large_radius_distance, law_of_cosines_distance},
    error::{NetworkError, NetworkErrorCode, Result},
    graph::{HyperbolicGraph, NodeCoordinates},
    network::HyperbolicNetwork,
    projection::project,
    topology::{DegreeSummary, TopologyReport},
};
