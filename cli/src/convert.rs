#![deny(missing_docs)]

//! # Convert Command
//!
//! Exports an OpenAPI document into a mock server data folder.

use std::path::PathBuf;

use crate::error::{CliError, CliResult};
use oas2mock_core::{
    export_openapi_to_mock_server, ConversionReport, ConvertOptions, FileSystem, PathRoot,
    PortSource,
};

/// Root that fixture paths in `setting.yaml` are written relative to.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTo {
    /// `./data/<service>/...`
    Target,
    /// `./...` inside the service folder.
    Service,
}

impl From<RelativeTo> for PathRoot {
    fn from(value: RelativeTo) -> Self {
        match value {
            RelativeTo::Target => PathRoot::TargetRoot,
            RelativeTo::Service => PathRoot::ServiceRoot,
        }
    }
}

/// Arguments for the conversion.
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Path to the OpenAPI document (YAML or JSON).
    pub openapi_file: PathBuf,

    /// Existing folder receiving `data/<service>/`.
    pub target_folder: PathBuf,

    /// Fixed port for the mock server instead of one derived from the process id.
    #[clap(long, env = "OAS2MOCK_PORT")]
    pub port: Option<u16>,

    /// Disable the swagger UI of the mock server.
    #[clap(long, env = "OAS2MOCK_NO_SWAGGER")]
    pub no_swagger: bool,

    /// Root that fixture paths in the setting file are relative to.
    #[clap(long, value_enum, env = "OAS2MOCK_RELATIVE_TO", default_value = "target")]
    pub relative_to: RelativeTo,
}

impl ConvertArgs {
    /// Maps the arguments to conversion options.
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            port: self.port.map(PortSource::Fixed).unwrap_or_default(),
            swagger_enabled: !self.no_swagger,
            path_root: self.relative_to.into(),
        }
    }
}

/// Executes the conversion.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `fs` - The filesystem the run reads from and writes to.
pub fn execute<F: FileSystem + ?Sized>(args: &ConvertArgs, fs: &F) -> CliResult<ConversionReport> {
    if !args.openapi_file.is_file() {
        return Err(CliError::Usage(format!(
            "OpenAPI file does not exist: {:?}",
            args.openapi_file
        )));
    }

    if !args.target_folder.is_dir() {
        return Err(CliError::Usage(format!(
            "Target folder does not exist: {:?}",
            args.target_folder
        )));
    }

    let report =
        export_openapi_to_mock_server(&args.openapi_file, &args.target_folder, &args.options(), fs)?;

    tracing::info!(
        service_root = %report.service_root.display(),
        fixtures = report.fixtures.len(),
        "Mock server data folder ready"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oas2mock_core::LocalFileSystem;
    use std::fs;
    use tempfile::tempdir;

    fn args(openapi_file: PathBuf, target_folder: PathBuf) -> ConvertArgs {
        ConvertArgs {
            openapi_file,
            target_folder,
            port: Some(15000),
            no_swagger: true,
            relative_to: RelativeTo::Service,
        }
    }

    #[test]
    fn test_options_mapping() {
        let options = args(PathBuf::new(), PathBuf::new()).options();
        assert_eq!(options.port, PortSource::Fixed(15000));
        assert!(!options.swagger_enabled);
        assert_eq!(options.path_root, PathRoot::ServiceRoot);

        let mut defaults = args(PathBuf::new(), PathBuf::new());
        defaults.port = None;
        assert_eq!(defaults.options().port, PortSource::ProcessId);
    }

    #[test]
    fn test_execute_generates_data_folder() {
        let dir = tempdir().unwrap();
        let openapi_file = dir.path().join("api.yml");
        let yaml = r#"
openapi: 3.0.0
info: {title: Health Check, version: 1.0.0}
paths:
  /health:
    get:
      operationId: health
      responses:
        '200':
          description: OK
          content:
            text/plain:
              examples:
                up: {value: UP}
"#;
        fs::write(&openapi_file, yaml).unwrap();

        let report = execute(&args(openapi_file, dir.path().to_path_buf()), &LocalFileSystem)
            .unwrap();

        let root = dir.path().join("data/Health_Check");
        assert_eq!(report.service_root, root);
        assert_eq!(
            fs::read_to_string(root.join("GET/health/200/OK.json")).unwrap(),
            "UP"
        );
        assert!(root.join("openapi.yml").exists());

        let setting = fs::read_to_string(root.join("setting.yaml")).unwrap();
        assert!(setting.contains("port: 15000"));
        assert!(setting.contains("swaggerEnabled: false"));
        assert!(setting.contains("filePath: ./GET/health/200/OK.json"));
    }

    #[test]
    fn test_execute_missing_openapi() {
        let dir = tempdir().unwrap();
        let err = execute(
            &args(dir.path().join("missing.yaml"), dir.path().to_path_buf()),
            &LocalFileSystem,
        )
        .unwrap_err();
        assert!(format!("{}", err).contains("OpenAPI file does not exist"));
    }

    #[test]
    fn test_execute_missing_target() {
        let dir = tempdir().unwrap();
        let openapi_file = dir.path().join("api.yaml");
        fs::write(&openapi_file, "openapi: 3.0.0").unwrap();

        let err = execute(&args(openapi_file, dir.path().join("nope")), &LocalFileSystem)
            .unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
        assert!(format!("{}", err).contains("Target folder does not exist"));
    }
}
