#![deny(missing_docs)]

//! # Mock Configuration Builder
//!
//! Assembles a [`MockServiceConfig`] from a parsed OpenAPI document. No I/O happens here.

use crate::error::{FixtureError, FixtureResult};
use crate::mock::layout::PathRoot;
use crate::mock::models::MockServiceConfig;
use crate::naming::sanitize;
use crate::oas::examples::SchemaExampleTable;
use crate::oas::routes::walk_operations;
use openapiv3::OpenAPI;

/// Host every generated mock server binds to.
pub const DEFAULT_HOST: &str = "0.0.0.0";

const PORT_BASE: u32 = 10_000;
const PORT_SPAN: u32 = 50_000;

/// Where the mock server port comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortSource {
    /// Derived from the current process id, see [`process_port`].
    #[default]
    ProcessId,
    /// A fixed port.
    Fixed(u16),
}

impl PortSource {
    /// Resolves the port number.
    pub fn resolve(&self) -> u16 {
        match self {
            PortSource::ProcessId => process_port(),
            PortSource::Fixed(port) => *port,
        }
    }
}

/// Port derived from the process id, in `[10000, 60000)`.
///
/// Concurrent runs may collide; the value is not meant to be unique.
pub fn process_port() -> u16 {
    port_from_id(std::process::id())
}

fn port_from_id(id: u32) -> u16 {
    // Always below 60000, fits in u16
    (PORT_BASE + id % PORT_SPAN) as u16
}

/// Options of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Source of the mock server port.
    pub port: PortSource,
    /// Whether the mock server exposes the swagger UI.
    pub swagger_enabled: bool,
    /// Root that fixture paths in the setting file are relative to.
    pub path_root: PathRoot,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            port: PortSource::ProcessId,
            swagger_enabled: true,
            path_root: PathRoot::TargetRoot,
        }
    }
}

/// Builds the mock server setting for `document`.
///
/// Schema examples are synthesized once up front, then every operation is walked.
///
/// The service name must stay non-empty after sanitization: it names the service
/// folder, and an empty one would spill the fixtures straight into `data/`. Unlike
/// response and request names, an empty service name is rejected.
///
/// # Errors
///
/// * `FixtureError::Parse` if the document title sanitizes to an empty service name.
/// * `FixtureError::Parse` if a reusable schema references an undeclared schema.
/// * Any error of [`walk_operations`].
pub fn build_mock_config(
    document: &OpenAPI,
    options: &ConvertOptions,
) -> FixtureResult<MockServiceConfig> {
    let title = &document.info.title;
    if sanitize(title).is_empty() {
        return Err(FixtureError::Parse(format!(
            "Document title {:?} does not yield a usable service name",
            title
        )));
    }

    let schema_examples = SchemaExampleTable::from_document(document)?;
    tracing::debug!(schemas = schema_examples.len(), "Schema examples synthesized");

    let requests = walk_operations(document, &schema_examples)?;
    tracing::info!(service = %title, requests = requests.len(), "Mock server setting assembled");

    Ok(MockServiceConfig {
        name: title.clone(),
        description: document.info.description.clone().unwrap_or_default(),
        host: DEFAULT_HOST.to_string(),
        port: options.port.resolve(),
        swagger_enabled: options.swagger_enabled,
        headers: Vec::new(),
        requests,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::parse_openapi_document;
    use pretty_assertions::assert_eq;

    const DOC: &str = r#"
openapi: 3.0.0
info:
  title: Pet Store
  description: All the pets
  version: 1.0.0
paths:
  /pets:
    get:
      operationId: listPets
      responses:
        '200':
          description: OK
          content:
            application/json:
              schema: {$ref: '#/components/schemas/Pet'}
components:
  schemas:
    Pet:
      type: object
      properties:
        name: {type: string, example: Rex}
"#;

    #[test]
    fn test_build_config() {
        let doc = parse_openapi_document(DOC.as_bytes()).unwrap();
        let options = ConvertOptions {
            port: PortSource::Fixed(12345),
            ..ConvertOptions::default()
        };
        let config = build_mock_config(&doc, &options).unwrap();

        assert_eq!(config.name, "Pet Store");
        assert_eq!(config.description, "All the pets");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 12345);
        assert!(config.swagger_enabled);
        assert!(config.headers.is_empty());
        assert_eq!(config.requests.len(), 1);
        assert_eq!(
            config.requests[0].responses[0].body.as_deref(),
            Some("{\n  \"name\": \"Rex\"\n}")
        );
    }

    #[test]
    fn test_swagger_flag_and_missing_description() {
        let doc = parse_openapi_document(
            b"openapi: 3.0.0\ninfo: {title: Bare, version: 1.0.0}\npaths: {}\n",
        )
        .unwrap();
        let options = ConvertOptions {
            swagger_enabled: false,
            ..ConvertOptions::default()
        };
        let config = build_mock_config(&doc, &options).unwrap();
        assert!(!config.swagger_enabled);
        assert_eq!(config.description, "");
        assert!(config.requests.is_empty());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let doc = parse_openapi_document(
            b"openapi: 3.0.0\ninfo: {title: '???', version: 1.0.0}\npaths: {}\n",
        )
        .unwrap();
        let err = build_mock_config(&doc, &ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, FixtureError::Parse(_)));
        assert!(format!("{}", err).contains("usable service name"));
    }

    #[test]
    fn test_dangling_response_reference_fails_build() {
        let doc = parse_openapi_document(
            br#"
openapi: 3.0.0
info: {title: Pet Store, version: 1.0.0}
paths:
  /pets:
    get:
      operationId: listPets
      responses:
        '200': {description: OK}
        '404': {$ref: '#/components/responses/Missing'}
"#,
        )
        .unwrap();
        match build_mock_config(&doc, &ConvertOptions::default()).unwrap_err() {
            FixtureError::Parse(message) => assert_eq!(
                message,
                "Unresolvable reference #/components/responses/Missing in operation listPets"
            ),
            other => panic!("Wrong error type: {}", other),
        }
    }

    #[test]
    fn test_port_range() {
        assert_eq!(port_from_id(0), 10_000);
        assert_eq!(port_from_id(49_999), 59_999);
        assert_eq!(port_from_id(50_000), 10_000);
        assert_eq!(port_from_id(u32::MAX), 10_000 + (u32::MAX % 50_000) as u16);

        let port = process_port();
        assert!((10_000..60_000).contains(&port));
        assert_eq!(PortSource::Fixed(8080).resolve(), 8080);
    }
}
