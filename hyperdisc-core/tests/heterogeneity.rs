//! Regression guard: the hyperbolic model must produce heavy-tailed degree
//! sequences where a uniform random graph of the same size does not.

use hyperdisc_core::{DistanceModel, NetworkBuilder};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Uniform G(n, m) companion graph: `m` distinct edges drawn uniformly from
/// the unordered pairs. Euclidean comparison construction for this test
/// only; it is deliberately not part of the library surface.
fn gnm_degrees(n: usize, m: usize, seed: u64) -> Vec<usize> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges = std::collections::HashSet::with_capacity(m);
    while edges.len() < m {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        if i == j {
            continue;
        }
        let pair = if i < j { (i, j) } else { (j, i) };
        edges.insert(pair);
    }
    let mut degrees = vec![0_usize; n];
    for (i, j) in edges {
        degrees[i] += 1;
        degrees[j] += 1;
    }
    degrees
}

fn heterogeneity(degrees: &[usize]) -> f64 {
    #[expect(
        clippy::cast_precision_loss,
        reason = "test degree values are tiny"
    )]
    let n = degrees.len() as f64;
    #[expect(
        clippy::cast_precision_loss,
        reason = "test degree values are tiny"
    )]
    let mean = degrees.iter().sum::<usize>() as f64 / n;
    if mean == 0.0 {
        return 0.0;
    }
    #[expect(
        clippy::cast_precision_loss,
        reason = "test degree values are tiny"
    )]
    let variance = degrees
        .iter()
        .map(|&d| {
            let diff = d as f64 - mean;
            diff * diff
        })
        .sum::<f64>()
        / n;
    variance.sqrt() / mean
}

#[test]
fn hyperbolic_degrees_are_heavy_tailed_where_uniform_degrees_are_not() {
    let graph = NetworkBuilder::new(200, 2.1, 10.0)
        .with_distance_model(DistanceModel::LargeRadius)
        .with_seed(1717)
        .build()
        .expect("configuration must be valid")
        .generate()
        .expect("generation must succeed");

    let report = graph.topology_report();
    assert!(
        report.degree_summary.heterogeneity > 1.0,
        "hyperbolic heterogeneity {} not heavy-tailed",
        report.degree_summary.heterogeneity
    );

    let companion = gnm_degrees(graph.node_count(), graph.edge_count(), 1717);
    let uniform = heterogeneity(&companion);
    assert!(
        uniform < 0.5,
        "uniform companion heterogeneity {uniform} unexpectedly large"
    );
}

#[test]
fn exponent_estimate_lands_near_the_target() {
    let graph = NetworkBuilder::new(500, 2.5, 5.0)
        .with_distance_model(DistanceModel::LargeRadius)
        .with_seed(42)
        .build()
        .expect("configuration must be valid")
        .generate()
        .expect("generation must succeed");

    let estimate = graph
        .topology_report()
        .exponent_estimate
        .expect("a 500-node heavy-tailed graph has a rich histogram");
    // The crude log-log fit is noisy; only its order of magnitude matters.
    assert!(
        estimate > 0.5 && estimate < 5.0,
        "estimate {estimate} implausible for target 2.5"
    );
}
