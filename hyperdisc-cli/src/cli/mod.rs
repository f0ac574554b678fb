//! CLI surface for the hyperdisc binary.

mod commands;

pub use commands::{
    Cli, CliError, Command, DistanceArg, ExecutionSummary, GenerateCommand, render_summary,
    run_cli,
};
