#![deny(missing_docs)]

//! # Mock Server Module
//!
//! - **models**: The mock server setting (requests, responses, headers).
//! - **builder**: Assembles the setting from an OpenAPI document.
//! - **layout**: Plans the fixture directory tree and file paths.
//! - **persist**: Filesystem seam, fixture writes and the `setting.yaml` file.

pub mod builder;
pub mod layout;
pub mod models;
pub mod persist;

pub use builder::{build_mock_config, process_port, ConvertOptions, PortSource, DEFAULT_HOST};
pub use layout::{plan_fixtures, service_root, FileWrite, FixturePlan, PathRoot};
pub use models::{HeaderSpec, MockServiceConfig, RequestSpec, ResponseSpec};
pub use persist::{copy_source_document, persist_fixtures, FileSystem, LocalFileSystem};
