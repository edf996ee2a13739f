#![deny(missing_docs)]

//! # Response Extraction
//!
//! Expands the responses of one operation into concrete example responses.
//!
//! For each status code and content type the example source is, in order:
//! 1. every named inline example (`examples`), one response each;
//! 2. the synthesized example of the referenced reusable schema;
//! 3. nothing, the response is emitted without a body.

use crate::error::{FixtureError, FixtureResult};
use crate::mock::models::{HeaderSpec, ResponseSpec};
use crate::naming::sanitize;
use crate::oas::examples::{ExampleBody, SchemaExampleTable};
use crate::oas::refs::{resolve_example, resolve_response, schema_ref_exists, unresolvable};
use openapiv3::{Components, MediaType, ReferenceOr, Responses, StatusCode};

/// Extracts the example responses of an operation, sorted ascending by status code.
///
/// Responses sharing a status code keep the order in which their content types and
/// examples are declared.
///
/// # Errors
///
/// * `FixtureError::InvalidStatusCode` if a response key is not a plain integer
///   (`default` and ranges such as `2XX` included).
/// * `FixtureError::Parse` if a response, example or schema reference is dangling.
pub fn extract_responses(
    operation: &str,
    responses: &Responses,
    components: Option<&Components>,
    schema_examples: &SchemaExampleTable,
) -> FixtureResult<Vec<ResponseSpec>> {
    if responses.default.is_some() {
        return Err(FixtureError::InvalidStatusCode {
            operation: operation.to_string(),
            code: "default".into(),
        });
    }

    let mut extracted = Vec::new();

    for (status, ref_or) in &responses.responses {
        let code = status_code(operation, status)?;

        let response = match ref_or {
            ReferenceOr::Item(response) => response,
            ReferenceOr::Reference { reference } => resolve_response(ref_or, components)
                .ok_or_else(|| unresolvable(reference, &format!("operation {}", operation)))?,
        };

        let name = sanitize(&response.description);

        if response.content.is_empty() {
            extracted.push(ResponseSpec::new(
                name,
                code,
                format!("?key={}", code),
                vec![],
                None,
            ));
            continue;
        }

        for (content_type, media) in &response.content {
            extracted.extend(extract_media(
                operation,
                &name,
                code,
                content_type,
                media,
                components,
                schema_examples,
            )?);
        }
    }

    extracted.sort_by_key(|r| r.code);
    Ok(extracted)
}

fn extract_media(
    operation: &str,
    name: &str,
    code: u16,
    content_type: &str,
    media: &MediaType,
    components: Option<&Components>,
    schema_examples: &SchemaExampleTable,
) -> FixtureResult<Vec<ResponseSpec>> {
    let headers = vec![HeaderSpec::content_type(content_type)];
    let query = format!("?key={}&contentType={}", code, content_type);

    if !media.examples.is_empty() {
        let mut out = Vec::with_capacity(media.examples.len());
        for (example_name, example) in &media.examples {
            let resolved = match example {
                ReferenceOr::Item(example) => example,
                ReferenceOr::Reference { reference } => resolve_example(example, components)
                    .ok_or_else(|| unresolvable(reference, &format!("operation {}", operation)))?,
            };
            let body = resolved
                .value
                .as_ref()
                .and_then(ExampleBody::from_value)
                .map(|b| b.render());

            out.push(ResponseSpec::new(
                name,
                code,
                format!("{}&name={}", query, example_name),
                headers.clone(),
                body,
            ));
        }
        return Ok(out);
    }

    let body = match &media.schema {
        Some(ReferenceOr::Reference { reference }) => {
            if !schema_ref_exists(reference, components) {
                return Err(unresolvable(reference, &format!("operation {}", operation)));
            }
            schema_examples.get(reference).map(str::to_string)
        }
        _ => None,
    };

    Ok(vec![ResponseSpec::new(name, code, query, headers, body)])
}

fn status_code(operation: &str, status: &StatusCode) -> FixtureResult<u16> {
    match status {
        StatusCode::Code(code) => Ok(*code),
        StatusCode::Range(range) => Err(FixtureError::InvalidStatusCode {
            operation: operation.to_string(),
            code: format!("{}XX", range),
        }),
    }
}
