#![deny(missing_docs)]

//! # Fixture Layout
//!
//! Decides where every response body lives on disk:
//!
//! ```text
//! <target>/data/<service>/<METHOD>/<request>/<code>/<response>.json
//! ```
//!
//! Planning creates the directories, moves each body out of its [`ResponseSpec`] into a
//! [`FileWrite`] and records the fixture path on the response instead.

use crate::error::{FixtureError, FixtureResult};
use crate::mock::models::MockServiceConfig;
use crate::mock::persist::FileSystem;
use crate::naming::sanitize;
use std::path::{Component, Path, PathBuf};

/// Root that the `filePath` entries of the setting file are relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathRoot {
    /// `./data/<service>/...`, relative to the target folder.
    #[default]
    TargetRoot,
    /// `./...`, relative to the service folder.
    ServiceRoot,
}

/// A fixture file to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWrite {
    /// Full path of the file.
    pub path: PathBuf,
    /// Body text.
    pub contents: String,
}

/// The outcome of layout planning.
#[derive(Debug, Clone, PartialEq)]
pub struct FixturePlan {
    /// The setting, with fixture paths in place of bodies.
    pub config: MockServiceConfig,
    /// `<target>/data/<service>`.
    pub service_root: PathBuf,
    /// Fixture files to write.
    pub writes: Vec<FileWrite>,
}

/// Computes `<target_root>/data/<sanitized service name>`.
///
/// Trailing separators on `target_root` are ignored.
pub fn service_root(target_root: &Path, service_name: &str) -> PathBuf {
    let trimmed: PathBuf = target_root.components().collect();
    trimmed.join("data").join(sanitize(service_name))
}

/// Plans the fixture files of `config` under `target_root`.
///
/// Responses without a body get no file path.
///
/// Known limitations:
/// * Two responses of the same request and status code whose names sanitize identically
///   share one file; the later write wins.
/// * The request name (the `operationId`) is used as a folder name as is, so an
///   `operationId` such as `pets/list` nests one folder per segment. Names that would
///   leave the method folder (`..`, `.` or absolute segments) are rejected.
///
/// # Errors
///
/// * `FixtureError::Filesystem` if the service folder or a response folder cannot be created.
/// * `FixtureError::Parse` if a request name with a body would leave its method folder.
pub fn plan_fixtures<F: FileSystem + ?Sized>(
    mut config: MockServiceConfig,
    target_root: &Path,
    path_root: PathRoot,
    fs: &F,
) -> FixtureResult<FixturePlan> {
    let service_folder = sanitize(&config.name);
    let root = service_root(target_root, &config.name);
    create_dir(fs, &root)?;

    let mut writes = Vec::new();

    for request in &mut config.requests {
        for response in &mut request.responses {
            let Some(body) = response.body.take() else {
                continue;
            };

            check_request_folder(&request.name)?;
            let folder_relative =
                format!("{}/{}/{}", request.method, request.name, response.code);
            let file_name = format!("{}.json", sanitize(&response.name));

            let folder_full = root
                .join(&request.method)
                .join(&request.name)
                .join(response.code.to_string());
            create_dir(fs, &folder_full)?;

            let file_relative = match path_root {
                PathRoot::TargetRoot => {
                    format!("./data/{}/{}/{}", service_folder, folder_relative, file_name)
                }
                PathRoot::ServiceRoot => format!("./{}/{}", folder_relative, file_name),
            };

            tracing::debug!(file = %file_relative, "Planned response fixture");
            response.file_path = Some(file_relative);
            writes.push(FileWrite {
                path: folder_full.join(&file_name),
                contents: body,
            });
        }
    }

    Ok(FixturePlan {
        config,
        service_root: root,
        writes,
    })
}

fn check_request_folder(name: &str) -> FixtureResult<()> {
    let contained = Path::new(name)
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if contained {
        Ok(())
    } else {
        Err(FixtureError::Parse(format!(
            "Operation name {:?} cannot be used as a fixture folder",
            name
        )))
    }
}

fn create_dir<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> FixtureResult<()> {
    fs.create_dir_all(path)
        .map_err(|e| FixtureError::filesystem("create directory", path, e))
}
