//! Advisory topology analysis of a generated graph.
//!
//! Everything in this module is diagnostic: the statistics report on the
//! realised graph and never feed back into generation. Estimates that need
//! more structure than the graph offers degrade to `None` rather than
//! failing.

use std::collections::HashSet;

use crate::graph::HyperbolicGraph;

/// Summary statistics over the degree sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeSummary {
    /// Smallest degree.
    pub min: usize,
    /// Largest degree.
    pub max: usize,
    /// Mean degree.
    pub mean: f64,
    /// Median degree (midpoint average for even node counts).
    pub median: f64,
    /// Population standard deviation of the degrees.
    pub std_dev: f64,
    /// Degree heterogeneity, `std_dev / mean`; `0.0` when the mean is zero.
    pub heterogeneity: f64,
}

/// Structured topology summary returned by
/// [`HyperbolicGraph::topology_report`].
///
/// # Examples
/// ```
/// use hyperdisc_core::NetworkBuilder;
///
/// let graph = NetworkBuilder::new(50, 2.5, 3.0).build()?.generate()?;
/// let report = graph.topology_report();
/// assert!(report.degree_summary.mean >= 0.0);
/// # Ok::<(), hyperdisc_core::NetworkError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyReport {
    /// Degree statistics of the realised graph.
    pub degree_summary: DegreeSummary,
    /// Empirical power-law exponent fitted to the degree histogram, or
    /// `None` when fewer than two distinct positive degrees exist.
    pub exponent_estimate: Option<f64>,
    /// Mean local clustering coefficient over nodes of degree two or more,
    /// or `None` when no node qualifies. Nodes of degree below two are
    /// excluded from the average rather than counted as zero.
    pub mean_clustering: Option<f64>,
}

impl TopologyReport {
    pub(crate) fn from_graph(graph: &HyperbolicGraph) -> Self {
        Self {
            degree_summary: summarise_degrees(graph.degrees()),
            exponent_estimate: estimate_exponent(graph.degrees()),
            mean_clustering: mean_local_clustering(graph),
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "degree values sit far below 2^52"
)]
fn summarise_degrees(degrees: &[usize]) -> DegreeSummary {
    let n = degrees.len() as f64;
    let min = degrees.iter().copied().min().unwrap_or(0);
    let max = degrees.iter().copied().max().unwrap_or(0);
    let mean = degrees.iter().sum::<usize>() as f64 / n;
    let variance = degrees
        .iter()
        .map(|&d| {
            let diff = d as f64 - mean;
            diff * diff
        })
        .sum::<f64>()
        / n;
    let std_dev = variance.sqrt();
    let heterogeneity = if mean == 0.0 { 0.0 } else { std_dev / mean };

    let mut sorted = degrees.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    } else {
        sorted[mid] as f64
    };

    DegreeSummary {
        min,
        max,
        mean,
        median,
        std_dev,
        heterogeneity,
    }
}

/// Fits a line to `ln(count)` against `ln(degree)` over the positive-degree
/// histogram and reports the negated slope. A pure power law `P(k) ∝ k^-γ`
/// yields `γ` back.
#[expect(
    clippy::cast_precision_loss,
    reason = "degree values sit far below 2^52"
)]
fn estimate_exponent(degrees: &[usize]) -> Option<f64> {
    let max_degree = degrees.iter().copied().max()?;
    let mut counts = vec![0_usize; max_degree + 1];
    for &d in degrees {
        counts[d] += 1;
    }

    let points: Vec<(f64, f64)> = counts
        .iter()
        .enumerate()
        .skip(1)
        .filter(|&(_, &count)| count > 0)
        .map(|(degree, &count)| ((degree as f64).ln(), (count as f64).ln()))
        .collect();
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|&(x, _)| x).sum();
    let sum_y: f64 = points.iter().map(|&(_, y)| y).sum();
    let sum_xy: f64 = points.iter().map(|&(x, y)| x * y).sum();
    let sum_xx: f64 = points.iter().map(|&(x, _)| x * x).sum();

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }
    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    Some(-slope)
}

/// Mean local clustering coefficient over nodes of degree two or more.
#[expect(
    clippy::cast_precision_loss,
    reason = "neighbour counts sit far below 2^52"
)]
fn mean_local_clustering(graph: &HyperbolicGraph) -> Option<f64> {
    let n = graph.node_count();
    let mut neighbours: Vec<Vec<u32>> = vec![Vec::new(); n];
    let mut edge_set: HashSet<(u32, u32)> = HashSet::with_capacity(graph.edge_count());
    for &(i, j) in graph.edges() {
        neighbours[i as usize].push(j);
        neighbours[j as usize].push(i);
        edge_set.insert((i, j));
    }

    let mut total = 0.0;
    let mut qualifying = 0_usize;
    for adjacent in &neighbours {
        let degree = adjacent.len();
        if degree < 2 {
            continue;
        }
        let mut linked = 0_usize;
        for (idx, &a) in adjacent.iter().enumerate() {
            for &b in &adjacent[idx + 1..] {
                let pair = if a < b { (a, b) } else { (b, a) };
                if edge_set.contains(&pair) {
                    linked += 1;
                }
            }
        }
        let possible = degree * (degree - 1) / 2;
        total += linked as f64 / possible as f64;
        qualifying += 1;
    }

    (qualifying > 0).then(|| total / qualifying as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::graph::NodeCoordinates;
    use rstest::rstest;

    fn graph_with_edges(n: usize, edges: Vec<(u32, u32)>) -> HyperbolicGraph {
        let nodes = vec![NodeCoordinates { r: 1.0, theta: 0.0 }; n];
        HyperbolicGraph::new(nodes, edges)
    }

    #[test]
    fn summary_of_empty_edge_set_is_all_zero() {
        let graph = graph_with_edges(4, Vec::new());
        let summary = summarise_degrees(graph.degrees());
        assert_eq!(summary.min, 0);
        assert_eq!(summary.max, 0);
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.heterogeneity, 0.0);
    }

    #[test]
    fn summary_matches_hand_computation() {
        // Degrees: [2, 1, 1, 0].
        let graph = graph_with_edges(4, vec![(0, 1), (0, 2)]);
        let summary = summarise_degrees(graph.degrees());
        assert_eq!(summary.min, 0);
        assert_eq!(summary.max, 2);
        assert!((summary.mean - 1.0).abs() < 1e-12);
        assert!((summary.median - 1.0).abs() < 1e-12);
        let expected_std = (0.5_f64).sqrt();
        assert!((summary.std_dev - expected_std).abs() < 1e-12);
        assert!((summary.heterogeneity - expected_std).abs() < 1e-12);
    }

    #[rstest]
    #[case::no_edges(vec![], None)]
    #[case::single_bucket(vec![(0, 1), (2, 3)], None)]
    fn exponent_needs_two_distinct_buckets(
        #[case] edges: Vec<(u32, u32)>,
        #[case] expected: Option<f64>,
    ) {
        let graph = graph_with_edges(4, edges);
        assert_eq!(estimate_exponent(graph.degrees()), expected);
    }

    #[test]
    fn exponent_recovers_an_exact_power_law() {
        // Histogram: 8 nodes of degree 1, 4 of degree 2, 2 of degree 4,
        // 1 of degree 8: count(k) = 8/k, a pure power law with exponent 1.
        let degrees: Vec<usize> = std::iter::repeat_n(1, 8)
            .chain(std::iter::repeat_n(2, 4))
            .chain(std::iter::repeat_n(4, 2))
            .chain(std::iter::repeat_n(8, 1))
            .collect();
        let estimate = estimate_exponent(&degrees).expect("four buckets available");
        assert!((estimate - 1.0).abs() < 1e-9, "estimate = {estimate}");
    }

    #[test]
    fn triangle_has_full_clustering() {
        let graph = graph_with_edges(3, vec![(0, 1), (0, 2), (1, 2)]);
        let clustering = mean_local_clustering(&graph).expect("all degrees are 2");
        assert!((clustering - 1.0).abs() < 1e-12);
    }

    #[test]
    fn path_has_zero_clustering() {
        let graph = graph_with_edges(3, vec![(0, 1), (1, 2)]);
        // Only the middle node qualifies and its neighbours are unlinked.
        let clustering = mean_local_clustering(&graph).expect("middle node qualifies");
        assert_eq!(clustering, 0.0);
    }

    #[test]
    fn clustering_excludes_low_degree_nodes() {
        let graph = graph_with_edges(2, vec![(0, 1)]);
        assert_eq!(mean_local_clustering(&graph), None);
    }
}
