#![deny(missing_docs)]

//! # Persistence
//!
//! Writes a [`FixturePlan`] to storage: the fixture files, the `setting.yaml` file and a
//! copy of the source OpenAPI document.

use crate::error::{FixtureError, FixtureResult};
use crate::mock::layout::FixturePlan;
use crate::mock::models::MockServiceConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the serialized mock server setting.
pub const SETTING_FILE_NAME: &str = "setting.yaml";

/// Base name of the copied source document.
pub const SOURCE_COPY_STEM: &str = "openapi";

/// Interface for the filesystem operations of a conversion run.
///
/// Abstracted to allow injecting failures in tests.
pub trait FileSystem {
    /// Creates `path` and all missing parents.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
    /// Writes `contents` to `path`, replacing any existing file.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
    /// Reads the whole file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Standard filesystem using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// Renders the setting as YAML.
pub fn render_setting(config: &MockServiceConfig) -> FixtureResult<String> {
    Ok(serde_yaml::to_string(config)?)
}

/// Writes every planned fixture, then the setting file. Returns the setting file path.
pub fn persist_fixtures<F: FileSystem + ?Sized>(
    plan: &FixturePlan,
    fs: &F,
) -> FixtureResult<PathBuf> {
    for write in &plan.writes {
        fs.write(&write.path, write.contents.as_bytes())
            .map_err(|e| FixtureError::filesystem("write response body", &write.path, e))?;
        tracing::debug!(path = %write.path.display(), "Response body saved");
    }

    let setting_path = plan.service_root.join(SETTING_FILE_NAME);
    let yaml = render_setting(&plan.config)?;
    fs.write(&setting_path, yaml.as_bytes())
        .map_err(|e| FixtureError::filesystem("write mock server setting", &setting_path, e))?;
    tracing::info!(path = %setting_path.display(), "Mock server setting saved");

    Ok(setting_path)
}

/// Copies the source document to `<service_root>/openapi<.ext>`. Returns the copy's path.
pub fn copy_source_document<F: FileSystem + ?Sized>(
    source: &Path,
    service_root: &Path,
    fs: &F,
) -> FixtureResult<PathBuf> {
    let bytes = fs
        .read(source)
        .map_err(|e| FixtureError::filesystem("read OpenAPI file", source, e))?;

    let file_name = match source.extension() {
        Some(ext) => format!("{}.{}", SOURCE_COPY_STEM, ext.to_string_lossy()),
        None => SOURCE_COPY_STEM.to_string(),
    };
    let target = service_root.join(file_name);

    fs.write(&target, &bytes)
        .map_err(|e| FixtureError::filesystem("copy OpenAPI file", &target, e))?;
    tracing::info!(path = %target.display(), "OpenAPI file copied to data folder");

    Ok(target)
}
