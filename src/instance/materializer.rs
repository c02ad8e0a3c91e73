//! Instance materializer implementation

use super::types::{FieldValue, Instance};
use crate::error::Result;
use crate::schema::{as_i32, expect_object, json_kind_name, parse_document, SemanticKind};
use crate::synth::TypeSynthesizer;
use crate::types::JsonObject;
use serde_json::value::RawValue;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{trace, warn};

/// Builds instances of synthesized types populated from JSON documents
#[derive(Debug, Clone, Default)]
pub struct InstanceMaterializer {
    synthesizer: TypeSynthesizer,
}

impl InstanceMaterializer {
    /// Create a materializer on top of a synthesizer
    pub fn new(synthesizer: TypeSynthesizer) -> Self {
        Self { synthesizer }
    }

    /// The synthesizer used to resolve types
    pub fn synthesizer(&self) -> &TypeSynthesizer {
        &self.synthesizer
    }

    /// Create an instance of the type named `name` populated from JSON text
    ///
    /// The type is synthesized from the document if `name` is new. Fields
    /// missing from the document keep their zero value; properties the type
    /// does not know are ignored. A value whose kind disagrees with its field
    /// is stored as its exact source text.
    pub fn create_instance<'a>(
        &self,
        name: &str,
        json: impl Into<Option<&'a str>>,
    ) -> Result<Instance> {
        let text = json.into();
        let document = parse_document(text)?;
        let ty = self.synthesizer.create_type_from_value(name, &document)?;
        let source = expect_object(&document)?;
        let raw = match text {
            Some(text) => serde_json::from_str::<RawFields<'_>>(text)?,
            None => RawFields::new(),
        };

        let mut instance = ty.new_instance();
        populate(&mut instance, source, Some(&raw));
        Ok(instance)
    }

    /// Same as [`create_instance`](Self::create_instance) for an already
    /// parsed document
    ///
    /// Without source text, mismatched values fall back to their compact
    /// JSON rendering.
    pub fn create_instance_from_value(&self, name: &str, document: &Value) -> Result<Instance> {
        let ty = self.synthesizer.create_type_from_value(name, document)?;
        let source = expect_object(document)?;

        let mut instance = ty.new_instance();
        populate(&mut instance, source, None);
        Ok(instance)
    }
}

/// Top-level properties of a JSON object as unparsed source slices; the last
/// occurrence of a duplicated key wins, as in the parsed document
type RawFields<'a> = HashMap<String, &'a RawValue>;

/// Fill an instance's slots from the matching properties of a JSON object
fn populate(instance: &mut Instance, source: &JsonObject, raw: Option<&RawFields<'_>>) {
    let ty = Arc::clone(instance.type_handle());
    for accessor in ty.accessors() {
        let Some(value) = source.get(accessor.name()) else {
            continue;
        };
        let raw_value = raw
            .and_then(|fields| fields.get(accessor.name()))
            .map(|v| v.get());
        let converted = convert(value, raw_value, accessor.kind(), accessor.name());
        trace!(field = accessor.name(), kind = %accessor.kind(), "Materialized field");
        *instance.slot_mut(accessor.index()) = converted;
    }
}

/// Convert a JSON value to a slot value of the given kind
///
/// Null resets typed fields to their zero value. A value whose kind disagrees
/// with the field falls back to its raw JSON text: `raw` when the source text
/// is known, the compact rendering of `value` otherwise.
pub(crate) fn convert(
    value: &Value,
    raw: Option<&str>,
    kind: SemanticKind,
    field: &str,
) -> FieldValue {
    let converted = match (kind, value) {
        (SemanticKind::String, Value::String(s)) => Some(FieldValue::String(s.clone())),
        (SemanticKind::Integer, Value::Number(n)) => as_i32(n).map(FieldValue::Integer),
        (SemanticKind::Float, Value::Number(n)) => n.as_f64().map(FieldValue::Float),
        (SemanticKind::Boolean, Value::Bool(b)) => Some(FieldValue::Boolean(*b)),
        (SemanticKind::Opaque, Value::Null | Value::Array(_) | Value::Object(_)) => {
            Some(FieldValue::Null)
        }
        (_, Value::Null) => Some(FieldValue::zero(kind)),
        _ => None,
    };

    converted.unwrap_or_else(|| {
        warn!(
            field,
            expected = %kind,
            found = json_kind_name(value),
            "Value kind disagrees with field kind, storing raw text"
        );
        FieldValue::String(raw_text(value, raw))
    })
}

/// Raw textual representation of a JSON value; strings contribute their
/// content unquoted
fn raw_text(value: &Value, raw: Option<&str>) -> String {
    match (value, raw) {
        (Value::String(s), _) => s.clone(),
        (_, Some(raw)) => raw.to_string(),
        (other, None) => other.to_string(),
    }
}
