#![deny(missing_docs)]

//! # Reference Resolution
//!
//! Helper functions to resolve local OpenAPI `$ref` objects against `components`.
//! Only resolves one level deep; a reference pointing at another reference is unresolved.
//! A reference whose target does not exist at all is dangling, and a dangling reference
//! fails the run with [`unresolvable`].

use crate::error::FixtureError;
use openapiv3::{Components, Example, ReferenceOr, Response, Schema};

/// Prefix of references to reusable schemas.
pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

const RESPONSE_REF_PREFIX: &str = "#/components/responses/";
const EXAMPLE_REF_PREFIX: &str = "#/components/examples/";

/// Builds the canonical reference string of a reusable schema.
/// e.g. `Pet` -> `#/components/schemas/Pet`
pub fn schema_ref(name: &str) -> String {
    format!("{}{}", SCHEMA_REF_PREFIX, name)
}

/// Resolves a `ReferenceOr<Schema>` to a `Schema` against `components`.
pub fn resolve_schema<'a>(
    ref_or: &'a ReferenceOr<Schema>,
    components: Option<&'a Components>,
) -> Option<&'a Schema> {
    match ref_or {
        ReferenceOr::Item(s) => Some(s),
        ReferenceOr::Reference { reference } => resolve_schema_ref(reference, components),
    }
}

/// Resolves a boxed property schema, as found in object `properties`.
pub fn resolve_property<'a>(
    ref_or: &'a ReferenceOr<Box<Schema>>,
    components: Option<&'a Components>,
) -> Option<&'a Schema> {
    match ref_or {
        ReferenceOr::Item(s) => Some(s.as_ref()),
        ReferenceOr::Reference { reference } => resolve_schema_ref(reference, components),
    }
}

/// Resolves a response entry, following `#/components/responses/<name>`.
pub fn resolve_response<'a>(
    ref_or: &'a ReferenceOr<Response>,
    components: Option<&'a Components>,
) -> Option<&'a Response> {
    match ref_or {
        ReferenceOr::Item(r) => Some(r),
        ReferenceOr::Reference { reference } => {
            let name = reference.strip_prefix(RESPONSE_REF_PREFIX)?;
            components?.responses.get(name)?.as_item()
        }
    }
}

/// Resolves a named example, following `#/components/examples/<name>`.
pub fn resolve_example<'a>(
    ref_or: &'a ReferenceOr<Example>,
    components: Option<&'a Components>,
) -> Option<&'a Example> {
    match ref_or {
        ReferenceOr::Item(e) => Some(e),
        ReferenceOr::Reference { reference } => {
            let name = reference.strip_prefix(EXAMPLE_REF_PREFIX)?;
            components?.examples.get(name)?.as_item()
        }
    }
}

/// True when `reference` names a schema declared under `components.schemas`,
/// whether or not that entry is itself a reference.
pub fn schema_ref_exists(reference: &str, components: Option<&Components>) -> bool {
    reference
        .strip_prefix(SCHEMA_REF_PREFIX)
        .zip(components)
        .is_some_and(|(name, comps)| comps.schemas.contains_key(name))
}

/// Error for a reference that cannot be resolved, `location` names where it was found,
/// e.g. `operation listPets` or `schema Pet`.
pub fn unresolvable(reference: &str, location: &str) -> FixtureError {
    FixtureError::Parse(format!(
        "Unresolvable reference {} in {}",
        reference, location
    ))
}

fn resolve_schema_ref<'a>(
    reference: &str,
    components: Option<&'a Components>,
) -> Option<&'a Schema> {
    let name = reference.strip_prefix(SCHEMA_REF_PREFIX)?;
    // Double ref resolution avoided
    components?.schemas.get(name)?.as_item()
}
