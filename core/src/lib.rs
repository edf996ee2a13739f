#![deny(missing_docs)]

//! # oas2mock Core
//!
//! Converts an OpenAPI document into a mock server data folder: a `setting.yaml`
//! describing routes and responses, plus a tree of example response bodies it references.

/// Shared error types.
pub mod error;

/// Filesystem-safe naming.
pub mod naming;

/// OpenAPI (OAS) extraction logic.
pub mod oas;

/// Mock server setting, fixture layout and persistence.
pub mod mock;

/// End-to-end conversion run.
pub mod pipeline;

pub use error::{FixtureError, FixtureResult};
pub use mock::{
    build_mock_config, plan_fixtures, ConvertOptions, FileSystem, FixturePlan, LocalFileSystem,
    MockServiceConfig, PathRoot, PortSource, RequestSpec, ResponseSpec,
};
pub use naming::sanitize;
pub use oas::{parse_openapi_document, SchemaExampleTable};
pub use pipeline::{export_openapi_to_mock_server, ConversionReport};
