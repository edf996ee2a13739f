#![deny(missing_docs)]

//! # OpenAPI Module
//!
//! - **refs**: One-level resolution of local `$ref`s.
//! - **examples**: Example bodies and schema example synthesis.
//! - **responses**: Expansion of an operation's responses into example responses.
//! - **routes**: Walk over `paths`, one request per operation.

pub mod examples;
pub mod refs;
pub mod responses;
pub mod routes;

use crate::error::{FixtureError, FixtureResult};
use crate::mock::persist::FileSystem;
use openapiv3::OpenAPI;
use std::path::Path;

pub use examples::{synthesize_schema_example, ExampleBody, SchemaExampleTable};
pub use responses::extract_responses;
pub use routes::walk_operations;

/// Parses an OpenAPI document from YAML or JSON bytes.
pub fn parse_openapi_document(bytes: &[u8]) -> FixtureResult<OpenAPI> {
    serde_yaml::from_slice(bytes)
        .map_err(|e| FixtureError::Parse(format!("Failed to parse OpenAPI document: {}", e)))
}

/// Reads and parses the OpenAPI document at `path`.
pub fn load_openapi_document<F: FileSystem + ?Sized>(
    path: &Path,
    fs: &F,
) -> FixtureResult<OpenAPI> {
    let bytes = fs
        .read(path)
        .map_err(|e| FixtureError::filesystem("read OpenAPI file", path, e))?;
    parse_openapi_document(&bytes)
}
