#![deny(missing_docs)]

//! # Routes
//!
//! Walks `paths` and turns every operation into a [`RequestSpec`].

use crate::error::FixtureResult;
use crate::mock::models::RequestSpec;
use crate::naming::derive_operation_name;
use crate::oas::examples::SchemaExampleTable;
use crate::oas::responses::extract_responses;
use openapiv3::{OpenAPI, Operation, PathItem, ReferenceOr};

/// Lists the operations of a path item with their upper-case HTTP method.
fn operations(item: &PathItem) -> Vec<(&'static str, &Operation)> {
    [
        ("GET", &item.get),
        ("PUT", &item.put),
        ("POST", &item.post),
        ("DELETE", &item.delete),
        ("OPTIONS", &item.options),
        ("HEAD", &item.head),
        ("PATCH", &item.patch),
        ("TRACE", &item.trace),
    ]
    .into_iter()
    .filter_map(|(method, op)| op.as_ref().map(|o| (method, o)))
    .collect()
}

/// Builds one request per operation of the document.
///
/// Requests follow the document's path order, then the fixed method order of
/// [`operations`]. Operations without `operationId` get a name derived from method and path.
pub fn walk_operations(
    document: &OpenAPI,
    schema_examples: &SchemaExampleTable,
) -> FixtureResult<Vec<RequestSpec>> {
    let components = document.components.as_ref();
    let mut requests = Vec::new();

    for (path, path_ref) in &document.paths.paths {
        let item = match path_ref {
            ReferenceOr::Item(item) => item,
            ReferenceOr::Reference { reference } => {
                tracing::warn!(path = %path, reference = %reference, "Skipping path item reference");
                continue;
            }
        };

        for (method, operation) in operations(item) {
            let name = operation
                .operation_id
                .clone()
                .unwrap_or_else(|| derive_operation_name(method, path));

            tracing::debug!(path = %path, method, operation = %name, "Extracting responses");

            let responses =
                extract_responses(&name, &operation.responses, components, schema_examples)?;

            requests.push(RequestSpec {
                name,
                method: method.to_string(),
                path: path.clone(),
                responses,
            });
        }
    }

    Ok(requests)
}
