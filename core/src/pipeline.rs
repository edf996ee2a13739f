#![deny(missing_docs)]

//! # Conversion Pipeline
//!
//! One conversion run, start to finish:
//!
//! 1. **Load**: read and parse the OpenAPI document.
//! 2. **Build**: assemble the mock server setting.
//! 3. **Plan**: create the fixture folders and assign file paths.
//! 4. **Persist**: write fixture files and `setting.yaml`.
//! 5. **Copy**: keep a copy of the source document next to the setting.
//!
//! The first error aborts the run; files written before it stay on disk.

use crate::error::FixtureResult;
use crate::mock::builder::{build_mock_config, ConvertOptions};
use crate::mock::layout::plan_fixtures;
use crate::mock::persist::{copy_source_document, persist_fixtures, FileSystem};
use crate::oas::load_openapi_document;
use std::path::{Path, PathBuf};

/// What a conversion run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// `<target>/data/<service>`.
    pub service_root: PathBuf,
    /// The written `setting.yaml`.
    pub setting_file: PathBuf,
    /// Every written response fixture.
    pub fixtures: Vec<PathBuf>,
    /// The copy of the source document.
    pub source_copy: PathBuf,
}

/// Converts the OpenAPI document at `openapi_file` into a mock server data folder
/// under `target_root`.
pub fn export_openapi_to_mock_server<F: FileSystem + ?Sized>(
    openapi_file: &Path,
    target_root: &Path,
    options: &ConvertOptions,
    fs: &F,
) -> FixtureResult<ConversionReport> {
    tracing::info!(
        source = %openapi_file.display(),
        target = %target_root.display(),
        "Exporting OpenAPI to mock server"
    );

    let document = load_openapi_document(openapi_file, fs)?;
    let config = build_mock_config(&document, options)?;
    let plan = plan_fixtures(config, target_root, options.path_root, fs)?;
    let setting_file = persist_fixtures(&plan, fs)?;
    let source_copy = copy_source_document(openapi_file, &plan.service_root, fs)?;

    Ok(ConversionReport {
        service_root: plan.service_root,
        setting_file,
        fixtures: plan.writes.into_iter().map(|w| w.path).collect(),
        source_copy,
    })
}
