//! TikZ scene rendering for generated hyperbolic graphs.
//!
//! Consumes a [`HyperbolicGraph`] through its narrow read surface (nodes,
//! edges, degrees, Poincaré projection) and serialises a `tikzpicture`
//! suitable for inclusion in a publication figure. The core crate knows
//! nothing about this format.

use std::io;

use hyperdisc_core::{HyperbolicGraph, HyperbolicNetwork};
use thiserror::Error;

/// Smallest node radius emitted, in TikZ units.
const MIN_NODE_RADIUS: f64 = 0.01;
/// Additional radius granted to the highest-degree node.
const NODE_RADIUS_SPAN: f64 = 0.04;

/// Errors raised while writing a TikZ scene.
#[derive(Debug, Error)]
pub enum TikzError {
    /// The underlying writer failed.
    #[error("failed to write TikZ scene: {source}")]
    Write {
        /// Error surfaced by the output stream.
        #[source]
        source: io::Error,
    },
}

/// Renders a generated graph as TikZ vector markup.
///
/// Edges are drawn first (thin, translucent white) so nodes paint over
/// them; node circles scale with degree, the hubs visibly larger than the
/// periphery.
///
/// # Examples
/// ```
/// use hyperdisc_core::NetworkBuilder;
/// use hyperdisc_tikz::TikzScene;
///
/// let network = NetworkBuilder::new(20, 2.5, 2.0).with_seed(1).build()?;
/// let graph = network.generate()?;
/// let markup = TikzScene::new().render(&network, &graph);
/// assert!(markup.starts_with("\\begin{tikzpicture}"));
/// assert!(markup.ends_with("\\end{tikzpicture}\n"));
/// # Ok::<(), hyperdisc_core::NetworkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TikzScene {
    scale: f64,
}

impl Default for TikzScene {
    fn default() -> Self {
        Self { scale: 0.95 }
    }
}

impl TikzScene {
    /// Creates a scene with the default picture scale of `0.95`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the `tikzpicture` scale attribute.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Returns the configured picture scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Renders the scene into a TikZ string.
    #[must_use]
    pub fn render(&self, network: &HyperbolicNetwork, graph: &HyperbolicGraph) -> String {
        let positions = graph.projected_nodes();
        let sizes = node_sizes(graph.degrees());

        let mut out = String::new();
        out.push_str(&format!(
            "\\begin{{tikzpicture}}[scale={:.2}]\n",
            self.scale
        ));
        out.push_str(&format!(
            "  % Hyperbolic network with gamma = {}\n",
            network.gamma()
        ));
        out.push_str(&format!(
            "  % N = {}, k_bar = {}\n\n",
            network.node_count(),
            network.mean_degree_target()
        ));

        out.push_str("  % Edges\n");
        for &(i, j) in graph.edges() {
            let (xi, yi) = positions[i as usize];
            let (xj, yj) = positions[j as usize];
            out.push_str(&format!(
                "  \\draw[white, line width=0.3pt, opacity=0.2] ({xi:.4},{yi:.4}) -- ({xj:.4},{yj:.4});\n"
            ));
        }

        out.push_str("\n  % Nodes\n");
        for ((x, y), size) in positions.iter().zip(&sizes) {
            out.push_str(&format!(
                "  \\fill[white, opacity=0.5] ({x:.4},{y:.4}) circle ({size:.4});\n"
            ));
        }

        out.push_str("\\end{tikzpicture}\n");
        out
    }

    /// Renders the scene and writes it to `writer`.
    ///
    /// # Errors
    /// Returns [`TikzError::Write`] when the writer fails.
    pub fn write_to<W: io::Write>(
        &self,
        network: &HyperbolicNetwork,
        graph: &HyperbolicGraph,
        writer: &mut W,
    ) -> Result<(), TikzError> {
        writer
            .write_all(self.render(network, graph).as_bytes())
            .map_err(|source| TikzError::Write { source })
    }
}

/// Node circle radii scaled by degree. Every radius is the minimum when the
/// graph has no edges, mirroring the degenerate-maximum guard of the
/// reference figures.
#[expect(
    clippy::cast_precision_loss,
    reason = "degree values sit far below 2^52"
)]
fn node_sizes(degrees: &[usize]) -> Vec<f64> {
    let max_degree = degrees.iter().copied().max().unwrap_or(0);
    if max_degree == 0 {
        return vec![MIN_NODE_RADIUS; degrees.len()];
    }
    degrees
        .iter()
        .map(|&d| MIN_NODE_RADIUS + NODE_RADIUS_SPAN * (d as f64 / max_degree as f64))
        .collect()
}
