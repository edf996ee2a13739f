#![deny(missing_docs)]

//! # Logging
//!
//! Installs the `tracing` subscriber. `RUST_LOG` takes precedence over `--log-level`.

use crate::error::{CliError, CliResult};
use tracing_subscriber::EnvFilter;

/// Logging arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    /// Log filter used when `RUST_LOG` is not set (e.g. `info`, `oas2mock_core=debug`).
    #[clap(long, env = "OAS2MOCK_LOG", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines.
    #[clap(long, env = "OAS2MOCK_LOG_JSON")]
    pub log_json: bool,
}

/// Builds the filter from `RUST_LOG`, falling back to `--log-level`.
fn filter(args: &LogArgs) -> CliResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&args.log_level)
            .map_err(|e| CliError::Logging(format!("invalid log filter {:?}: {}", args.log_level, e))),
    }
}

/// Installs the global subscriber.
pub fn init(args: &LogArgs) -> CliResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(args)?)
        .with_writer(std::io::stderr);

    let installed = if args.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| CliError::Logging(e.to_string()))
}
