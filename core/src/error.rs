//! # Error Handling
//!
//! Provides the unified `FixtureError` enum returned by every stage of a conversion run.

use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// Every variant is fatal to the run that produced it.
#[derive(Debug, Display, From)]
pub enum FixtureError {
    /// The source document could not be parsed into an OpenAPI object.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// A response key that is not a plain integer status code.
    #[from(ignore)]
    #[display("Parse Error: response code '{code}' of operation '{operation}' is not an integer")]
    InvalidStatusCode {
        /// Name of the operation declaring the response.
        operation: String,
        /// The offending response key as written in the document.
        code: String,
    },

    /// A directory could not be created, or a file could not be read or written.
    #[from(ignore)]
    #[display("Filesystem Error: failed to {action} {path:?}: {source}")]
    Filesystem {
        /// What was attempted, e.g. `create directory`.
        action: &'static str,
        /// The path involved.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The mock server setting could not be rendered as YAML.
    #[display("Serialization Error: {_0}")]
    Serialization(serde_yaml::Error),
}

impl FixtureError {
    /// Builds a `Filesystem` error for `path`.
    pub fn filesystem(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixtureError::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::Filesystem { source, .. } => Some(source),
            FixtureError::Serialization(e) => Some(e),
            FixtureError::Parse(_) | FixtureError::InvalidStatusCode { .. } => None,
        }
    }
}

/// Helper type alias for Result using FixtureError.
pub type FixtureResult<T> = Result<T, FixtureError>;
