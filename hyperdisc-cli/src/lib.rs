//! Support library for the hyperdisc CLI binary.
//!
//! Re-exports the CLI module so doctests and integration tests can exercise
//! the command pipeline without forking a subprocess.

pub mod cli;
pub mod logging;
