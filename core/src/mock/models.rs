#![deny(missing_docs)]

//! # Mock Server Models
//!
//! The in-memory mock server setting. Serialized as the `setting.yaml` document read by the
//! mock server; response bodies travel separately as fixture files referenced by `filePath`.

use serde::{Deserialize, Serialize};

/// The generated mock server's full configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockServiceConfig {
    /// Service name, taken from the document title.
    pub name: String,
    /// Service description, taken from the document description.
    #[serde(default)]
    pub description: String,
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Whether the mock server exposes the swagger UI.
    pub swagger_enabled: bool,
    /// Headers added to every response.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<HeaderSpec>,
    /// One entry per operation.
    #[serde(default)]
    pub requests: Vec<RequestSpec>,
}

/// One API operation (method + path pair).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// Operation identifier.
    pub name: String,
    /// Upper-case HTTP method, e.g. `GET`.
    pub method: String,
    /// Path template, e.g. `/pets/{id}`.
    pub path: String,
    /// Example responses, ascending by status code.
    #[serde(default)]
    pub responses: Vec<ResponseSpec>,
}

/// One concrete example response of an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSpec {
    /// Sanitized response description.
    pub name: String,
    /// HTTP status code.
    pub code: u16,
    /// Discriminator query string, e.g. `?key=200&contentType=application/json`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query: String,
    /// Response headers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<HeaderSpec>,
    /// Path of the body fixture, set once the layout is planned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    /// Body text awaiting a fixture file. Never serialized.
    #[serde(skip)]
    pub body: Option<String>,
}

impl ResponseSpec {
    /// Creates a response without a file path. Empty bodies are dropped.
    pub fn new(
        name: impl Into<String>,
        code: u16,
        query: impl Into<String>,
        headers: Vec<HeaderSpec>,
        body: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code,
            query: query.into(),
            headers,
            file_path: None,
            body: body.filter(|b| !b.is_empty()),
        }
    }
}

/// A single HTTP header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSpec {
    /// Header name.
    pub name: String,
    /// Header value.
    pub value: String,
}

impl HeaderSpec {
    /// Creates a header.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// A `Content-Type` header.
    pub fn content_type(value: impl Into<String>) -> Self {
        Self::new("Content-Type", value)
    }
}
