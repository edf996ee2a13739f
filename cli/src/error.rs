#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use oas2mock_core::FixtureError;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// A conversion run failed.
    #[display("{}", _0)]
    Fixture(FixtureError),

    /// Invalid command line input, e.g. a missing file.
    #[from(ignore)]
    #[display("Usage Error: {}", _0)]
    Usage(String),

    /// The logging subscriber could not be installed.
    #[from(ignore)]
    #[display("Logging Error: {}", _0)]
    Logging(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Fixture(e) => Some(e),
            CliError::Usage(_) | CliError::Logging(_) => None,
        }
    }
}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
