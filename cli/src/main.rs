#![deny(missing_docs)]

//! # oas2mock CLI
//!
//! Exports an OpenAPI document into a mock server data folder:
//!
//! ```text
//! oas2mock <openapi-file> <target-folder>
//! ```
//!
//! Produces `<target-folder>/data/<title>/` with `setting.yaml`, the response
//! fixtures it references and a copy of the OpenAPI document.

use std::process::ExitCode;

use clap::Parser;
use oas2mock_core::{FileSystem, LocalFileSystem};

use crate::error::CliResult;

mod convert;
mod error;
mod logging;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI to mock server exporter")]
struct Cli {
    #[clap(flatten)]
    convert: convert::ConvertArgs,

    #[clap(flatten)]
    log: logging::LogArgs,
}

fn main() -> ExitCode {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if let Err(e) = logging::init(&cli.log) {
        // No subscriber to report through
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli, &LocalFileSystem) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the conversion. Errors are returned, never reported.
fn run<F: FileSystem + ?Sized>(cli: &Cli, fs: &F) -> CliResult<()> {
    convert::execute(&cli.convert, fs)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_positional_and_flags() {
        let cli = Cli::try_parse_from([
            "oas2mock",
            "api.yaml",
            "out",
            "--port",
            "20000",
            "--relative-to",
            "service",
        ])
        .unwrap();
        assert_eq!(cli.convert.openapi_file, std::path::PathBuf::from("api.yaml"));
        assert_eq!(cli.convert.target_folder, std::path::PathBuf::from("out"));
        assert_eq!(cli.convert.port, Some(20000));
        assert_eq!(cli.convert.relative_to, convert::RelativeTo::Service);
    }

    #[test]
    fn test_missing_arguments_rejected() {
        assert!(Cli::try_parse_from(["oas2mock", "api.yaml"]).is_err());
    }

    #[test]
    fn test_run_returns_error_without_reporting() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        let cli = Cli::try_parse_from([
            std::ffi::OsStr::new("oas2mock"),
            missing.as_os_str(),
            dir.path().as_os_str(),
        ])
        .unwrap();

        let err = run(&cli, &LocalFileSystem).unwrap_err();
        assert!(matches!(err, crate::error::CliError::Usage(_)));
    }
}
