//! Shape inference from JSON values

use super::types::{FieldDescriptor, SemanticKind, ShapeDescriptor};
use crate::error::{Error, Result};
use crate::types::JsonObject;
use serde_json::Value;

/// Parse JSON text into a value
///
/// Absent, empty or whitespace-only text is an input error; malformed text
/// is a parse error. The top-level kind is not checked here.
pub fn parse_document(json: Option<&str>) -> Result<Value> {
    let text = match json {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Err(Error::Input),
    };
    Ok(serde_json::from_str(text)?)
}

/// Borrow the root object of a document, or fail with a shape error
pub fn expect_object(value: &Value) -> Result<&JsonObject> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::shape(json_kind_name(other))),
    }
}

/// Infer the shape of a JSON object
///
/// Only the object's immediate properties are inspected. Field order follows
/// the order the properties appear in the source document.
pub fn analyze(value: &Value) -> Result<ShapeDescriptor> {
    let map = expect_object(value)?;
    Ok(map
        .iter()
        .map(|(key, val)| FieldDescriptor::new(key.as_str(), classify_value(val)))
        .collect())
}

/// Classify a JSON value into its semantic kind
pub fn classify_value(value: &Value) -> SemanticKind {
    match value {
        Value::String(_) => SemanticKind::String,
        Value::Bool(_) => SemanticKind::Boolean,
        Value::Number(n) => {
            if as_i32(n).is_some() {
                SemanticKind::Integer
            } else {
                SemanticKind::Float
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => SemanticKind::Opaque,
    }
}

/// Read a JSON number as an `i32` if it is an integer literal within range
pub(crate) fn as_i32(n: &serde_json::Number) -> Option<i32> {
    n.as_i64().and_then(|i| i32::try_from(i).ok())
}

/// Human-readable name of a JSON value's kind
pub fn json_kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
