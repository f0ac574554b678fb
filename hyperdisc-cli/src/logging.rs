//! Logging initialisation for the hyperdisc CLI.
//!
//! Installs a global `tracing` subscriber that writes diagnostics to stderr,
//! keeping stdout free for TikZ markup. The output encoding is selected with
//! `HYPERDISC_LOG_FORMAT` and the level with `RUST_LOG`.

use std::{env, io, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, registry::LookupSpan,
    util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "HYPERDISC_LOG_FORMAT";
const DEFAULT_DIRECTIVE: &str = "info";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Encodings supported by the diagnostic stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line events.
    #[default]
    Human,
    /// Newline-delimited JSON with span context, for log shippers.
    Json,
}

impl LogFormat {
    /// Reads the format from `HYPERDISC_LOG_FORMAT`, defaulting to
    /// [`LogFormat::Human`] when the variable is unset.
    ///
    /// # Errors
    /// Returns [`LoggingError`] when the variable holds invalid Unicode or
    /// names an unsupported format.
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source,
            }),
        }
    }
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying parse failure.
        #[source]
        source: env::VarError,
    },
    /// Unsupported log format requested via `HYPERDISC_LOG_FORMAT`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// Failed to install the global tracing subscriber.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Install global structured logging if it has not already been configured.
///
/// Events go to `stderr` so the TikZ payload on `stdout` stays parseable.
/// Generation spans report their timing when they close.
///
/// # Errors
/// Returns [`LoggingError`] when `HYPERDISC_LOG_FORMAT` cannot be read or
/// parsed. A subscriber installed elsewhere in the process is not an error;
/// its configuration wins and this call becomes a no-op.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let format = LogFormat::from_env()?;
    match install_subscriber(format) {
        Ok(()) | Err(LoggingError::InstallFailed { .. }) => {
            let _ = INITIALISED.set(());
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn install_subscriber(format: LogFormat) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(filter)
        .with(format_layer(format))
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}

fn format_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let base = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_span_events(FmtSpan::CLOSE);
    match format {
        LogFormat::Human => base.boxed(),
        LogFormat::Json => base
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    }
}
