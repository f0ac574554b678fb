//! Command implementations and argument parsing for the hyperdisc CLI.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use hyperdisc_core::{
    ConnectionRule, DistanceModel, NetworkBuilder, NetworkError, TopologyReport,
};
use hyperdisc_tikz::{TikzError, TikzScene};
use thiserror::Error;
use tracing::{info, instrument};

const DEFAULT_MEAN_DEGREE: f64 = 2.5;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "hyperdisc",
    about = "Generate hyperbolic random graphs and export TikZ figures."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a network and render its TikZ scene.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of nodes to sample.
    #[arg(long)]
    pub nodes: usize,

    /// Target power-law exponent (must exceed 1).
    #[arg(long)]
    pub gamma: f64,

    /// Target mean degree.
    #[arg(long = "mean-degree", default_value_t = DEFAULT_MEAN_DEGREE)]
    pub mean_degree: f64,

    /// Curvature parameter zeta.
    #[arg(long, default_value_t = 1.0)]
    pub zeta: f64,

    /// Fermi-Dirac inverse temperature. Omit for the hard threshold rule.
    #[arg(long)]
    pub beta: Option<f64>,

    /// Distance law to evaluate node pairs with.
    #[arg(long, value_enum, default_value = "exact")]
    pub distance: DistanceArg,

    /// Seed for the generator's random stream.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// TikZ picture scale attribute.
    #[arg(long, default_value_t = 0.95)]
    pub scale: f64,

    /// Write the TikZ scene to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Skip the topology report.
    #[arg(long = "no-report")]
    pub no_report: bool,
}

/// Distance laws selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistanceArg {
    /// Exact hyperbolic law of cosines.
    Exact,
    /// Large-radius approximation.
    Approx,
}

impl From<DistanceArg> for DistanceModel {
    fn from(arg: DistanceArg) -> Self {
        match arg {
            DistanceArg::Exact => Self::Exact,
            DistanceArg::Approx => Self::LargeRadius,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while writing the TikZ scene.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Core generation failed.
    #[error(transparent)]
    Core(#[from] NetworkError),
    /// TikZ serialisation failed.
    #[error(transparent)]
    Tikz(#[from] TikzError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    node_count: usize,
    edge_count: usize,
    mean_degree: f64,
    gamma_target: f64,
    report: Option<TopologyReport>,
    /// TikZ markup destined for stdout; `None` when written to a file.
    markup: Option<String>,
    output: Option<PathBuf>,
}

/// Parses nothing; executes an already-parsed [`Cli`] invocation.
///
/// # Errors
/// Returns [`CliError`] when parameter validation, generation, or scene
/// output fails.
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Generate(cmd) => run_generate(cmd),
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(cmd),
    fields(nodes = cmd.nodes, gamma = cmd.gamma, seed = cmd.seed),
)]
fn run_generate(cmd: GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let rule = match cmd.beta {
        Some(beta) => ConnectionRule::FermiDirac { beta },
        None => ConnectionRule::Threshold,
    };
    let network = NetworkBuilder::new(cmd.nodes, cmd.gamma, cmd.mean_degree)
        .with_zeta(cmd.zeta)
        .with_seed(cmd.seed)
        .with_distance_model(cmd.distance.into())
        .with_connection_rule(rule)
        .build()?;
    let graph = network.generate()?;
    info!(
        edges = graph.edge_count(),
        mean_degree = graph.mean_degree(),
        "network generated"
    );

    let report = (!cmd.no_report).then(|| graph.topology_report());
    let scene = TikzScene::new().with_scale(cmd.scale);
    let markup = match &cmd.output {
        Some(path) => {
            let mut file = File::create(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            scene.write_to(&network, &graph, &mut file)?;
            info!(path = %path.display(), "TikZ scene written");
            None
        }
        None => Some(scene.render(&network, &graph)),
    };

    Ok(ExecutionSummary {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        mean_degree: graph.mean_degree(),
        gamma_target: network.gamma(),
        report,
        markup,
        output: cmd.output,
    })
}

impl ExecutionSummary {
    /// Returns the generated node count.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the generated edge count.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the topology report, if one was requested.
    #[must_use]
    pub fn report(&self) -> Option<&TopologyReport> {
        self.report.as_ref()
    }

    /// Returns the TikZ markup destined for stdout, if any.
    #[must_use]
    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref()
    }
}

/// Writes the execution summary to `out`, with the topology report on
/// `diagnostics` when the TikZ markup occupies `out`.
///
/// When the scene was not redirected to a file the markup itself is the
/// stdout payload, so the report moves to the diagnostic stream to keep the
/// markup parseable; otherwise the whole summary, report included, goes to
/// `out`.
///
/// # Errors
/// Propagates any error from either writer.
pub fn render_summary<O, D>(
    summary: &ExecutionSummary,
    out: &mut O,
    diagnostics: &mut D,
) -> io::Result<()>
where
    O: Write,
    D: Write,
{
    if let Some(markup) = summary.markup() {
        out.write_all(markup.as_bytes())?;
        if let Some(report) = &summary.report {
            render_report(report, summary.gamma_target, diagnostics)?;
        }
        return Ok(());
    }

    writeln!(
        out,
        "Generated network: N = {}, edges = {}, mean degree {:.2}",
        summary.node_count, summary.edge_count, summary.mean_degree
    )?;
    if let Some(path) = &summary.output {
        writeln!(out, "TikZ scene written to {}", path.display())?;
    }
    if let Some(report) = &summary.report {
        render_report(report, summary.gamma_target, out)?;
    }
    Ok(())
}

fn render_report<W: Write>(
    report: &TopologyReport,
    gamma_target: f64,
    writer: &mut W,
) -> io::Result<()> {
    let degrees = &report.degree_summary;
    writeln!(
        writer,
        "Degrees: min {}, max {}, median {:.1}, std {:.2}",
        degrees.min, degrees.max, degrees.median, degrees.std_dev
    )?;
    writeln!(
        writer,
        "Degree heterogeneity (std/mean): {:.3}",
        degrees.heterogeneity
    )?;
    match report.exponent_estimate {
        Some(estimate) => writeln!(
            writer,
            "Estimated exponent: {estimate:.2} (target {gamma_target:.2})"
        )?,
        None => writeln!(writer, "Estimated exponent: unavailable")?,
    }
    match report.mean_clustering {
        Some(clustering) => writeln!(writer, "Mean clustering: {clustering:.4}")?,
        None => writeln!(writer, "Mean clustering: unavailable")?,
    }
    Ok(())
}
