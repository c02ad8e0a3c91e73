//! Catalog export
//!
//! Renders synthesized types for a schema-building consumer, either as a
//! JSON catalog of descriptors or as GraphQL SDL object types.
//!
//! JSON keys may be any string, GraphQL names may not. SDL rendering rejects
//! names outside `[_A-Za-z][_0-9A-Za-z]*`, names starting with `__` and type
//! names that shadow a built-in scalar, instead of emitting a schema the
//! consumer cannot parse.

use crate::error::{Error, Result, ResultExt};
use crate::schema::SemanticKind;
use crate::synth::SynthesizedType;
use crate::types::JsonValue;
use regex::Regex;
use serde_json::json;
use std::fmt::Write as _;
use std::sync::{Arc, LazyLock};

/// Scalar used for opaque fields in SDL output
pub const OPAQUE_SCALAR: &str = "Any";

/// Type names an SDL document cannot redefine
const RESERVED_TYPE_NAMES: [&str; 6] = ["String", "Int", "Float", "Boolean", "ID", OPAQUE_SCALAR];

/// GraphQL `Name` production
static GRAPHQL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[_A-Za-z][_0-9A-Za-z]*$").expect("valid name pattern"));

/// Render types as `{ "types": [ { "name", "fields" }, ... ] }`
pub fn to_catalog_json(types: &[Arc<SynthesizedType>]) -> Result<JsonValue> {
    let types = types
        .iter()
        .map(|ty| serde_json::to_value(ty.as_ref()).map_err(Error::Serialize))
        .collect::<Result<Vec<_>>>()?;
    Ok(json!({ "types": types }))
}

/// GraphQL type reference for a field kind
pub fn sdl_type(kind: SemanticKind) -> &'static str {
    match kind {
        SemanticKind::String => "String!",
        SemanticKind::Integer => "Int!",
        SemanticKind::Float => "Float!",
        SemanticKind::Boolean => "Boolean!",
        SemanticKind::Opaque => OPAQUE_SCALAR,
    }
}

/// Check that `name` is usable as a GraphQL name
pub fn is_graphql_name(name: &str) -> bool {
    GRAPHQL_NAME.is_match(name) && !name.starts_with("__")
}

fn check_type_name(name: &str) -> Result<()> {
    if is_graphql_name(name) && !RESERVED_TYPE_NAMES.contains(&name) {
        Ok(())
    } else {
        Err(Error::invalid_name("type", name))
    }
}

fn check_field_name(name: &str) -> Result<()> {
    if is_graphql_name(name) {
        Ok(())
    } else {
        Err(Error::invalid_name("field", name))
    }
}

/// Render types as GraphQL SDL object types, in the given order
///
/// Fails on the first type or field name GraphQL cannot express.
pub fn to_sdl(types: &[Arc<SynthesizedType>]) -> Result<String> {
    let mut out = String::new();

    let has_opaque = types
        .iter()
        .flat_map(|ty| ty.shape().iter())
        .any(|f| f.kind == SemanticKind::Opaque);
    if has_opaque {
        let _ = writeln!(out, "scalar {OPAQUE_SCALAR}");
        out.push('\n');
    }

    for (i, ty) in types.iter().enumerate() {
        check_type_name(ty.name())?;
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "type {} {{", ty.name());
        for field in ty.shape() {
            check_field_name(&field.name).with_context(|| format!("Type '{}'", ty.name()))?;
            let _ = writeln!(out, "  {}: {}", field.name, sdl_type(field.kind));
        }
        out.push_str("}\n");
    }

    Ok(out)
}
