#![deny(missing_docs)]

//! # Examples
//!
//! Turns OpenAPI example values into response body text.
//!
//! - [`ExampleBody`]: a literal example, classified once as text or structured JSON.
//! - [`synthesize_schema_example`]: best-effort JSON example for a reusable schema.
//! - [`SchemaExampleTable`]: synthesized examples keyed by `#/components/schemas/<name>`.

use crate::error::FixtureResult;
use crate::oas::refs::{
    resolve_property, resolve_schema, schema_ref, schema_ref_exists, unresolvable,
};
use indexmap::IndexMap;
use openapiv3::{Components, OpenAPI, ReferenceOr, Schema, SchemaKind, Type};
use serde_json::Value;
use std::collections::HashMap;

/// A literal example value as read from the document.
#[derive(Debug, Clone, PartialEq)]
pub enum ExampleBody {
    /// A string example, used verbatim as the body.
    Text(String),
    /// Any other JSON value, rendered as indented JSON.
    Structured(Value),
}

impl ExampleBody {
    /// Classifies an example value. `null` counts as no example.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(ExampleBody::Text(s.clone())),
            other => Some(ExampleBody::Structured(other.clone())),
        }
    }

    /// Renders the body text. Structured values are pretty-printed with 2-space indentation.
    ///
    /// Returns an empty string when the value cannot be rendered.
    pub fn render(&self) -> String {
        match self {
            ExampleBody::Text(s) => s.clone(),
            ExampleBody::Structured(v) => serde_json::to_string_pretty(v).unwrap_or_default(),
        }
    }
}

/// Synthesizes an example JSON object for a schema.
///
/// Only `string` and `integer` properties of an `object` schema are emitted, in declaration
/// order, each mapped to its declared example or `null`. Anything else yields `{}`.
/// Returns an empty string if the example cannot be serialized.
pub fn synthesize_schema_example(schema: &Schema, components: Option<&Components>) -> String {
    let mut example: IndexMap<String, Value> = IndexMap::new();

    if let Some(properties) = object_properties(schema) {
        for (name, property) in properties {
            let Some(property) = resolve_property(property, components) else {
                continue;
            };
            if is_primitive(property) {
                let value = property.schema_data.example.clone().unwrap_or(Value::Null);
                example.insert(name.clone(), value);
            }
        }
    }

    serde_json::to_string_pretty(&example).unwrap_or_default()
}

fn object_properties(schema: &Schema) -> Option<&IndexMap<String, ReferenceOr<Box<Schema>>>> {
    match &schema.schema_kind {
        SchemaKind::Type(Type::Object(obj)) => Some(&obj.properties),
        SchemaKind::Any(any) if any.typ.as_deref() == Some("object") => Some(&any.properties),
        _ => None,
    }
}

fn check_property_refs(
    schema: &Schema,
    components: Option<&Components>,
    location: &str,
) -> FixtureResult<()> {
    let Some(properties) = object_properties(schema) else {
        return Ok(());
    };
    for property in properties.values() {
        if let ReferenceOr::Reference { reference } = property {
            if !schema_ref_exists(reference, components) {
                return Err(unresolvable(reference, location));
            }
        }
    }
    Ok(())
}

fn is_primitive(schema: &Schema) -> bool {
    match &schema.schema_kind {
        SchemaKind::Type(Type::String(_)) | SchemaKind::Type(Type::Integer(_)) => true,
        SchemaKind::Any(any) => matches!(any.typ.as_deref(), Some("string") | Some("integer")),
        _ => false,
    }
}

/// Synthesized schema examples of one document, keyed by canonical reference string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaExampleTable {
    entries: HashMap<String, String>,
}

impl SchemaExampleTable {
    /// Synthesizes an example for every schema under `components.schemas`.
    ///
    /// A schema aliasing another reusable schema gets no entry.
    ///
    /// # Errors
    ///
    /// `FixtureError::Parse` if a schema, or one of its properties, references a schema
    /// that is not declared.
    pub fn from_document(document: &OpenAPI) -> FixtureResult<Self> {
        let components = document.components.as_ref();
        let mut entries = HashMap::new();

        if let Some(comps) = components {
            for (name, ref_or) in &comps.schemas {
                let location = format!("schema {}", name);
                let Some(schema) = resolve_schema(ref_or, components) else {
                    if let ReferenceOr::Reference { reference } = ref_or {
                        if !schema_ref_exists(reference, components) {
                            return Err(unresolvable(reference, &location));
                        }
                    }
                    tracing::debug!(schema = %name, "Schema alias, no example synthesized");
                    continue;
                };
                check_property_refs(schema, components, &location)?;
                let example = synthesize_schema_example(schema, components);
                tracing::debug!(schema = %name, "Synthesized schema example");
                entries.insert(schema_ref(name), example);
            }
        }

        Ok(Self { entries })
    }

    /// Returns the synthesized example for `reference`, if there is a non-empty one.
    pub fn get(&self, reference: &str) -> Option<&str> {
        self.entries
            .get(reference)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Number of schemas in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the document declares no reusable schemas.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
