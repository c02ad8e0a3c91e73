//! Instance types

use crate::error::{Error, Result};
use crate::schema::{FieldDescriptor, SemanticKind};
use crate::synth::SynthesizedType;
use crate::types::{JsonObject, JsonValue};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;

/// Value held by one instance slot
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Opaque slot content (null, arrays and objects are not copied)
    Null,
    /// String slot, or the raw text of a value that did not fit its field
    String(String),
    /// Integer slot
    Integer(i32),
    /// Float slot
    Float(f64),
    /// Boolean slot
    Boolean(bool),
}

impl FieldValue {
    /// Zero value for a kind: `""`, `0`, `0.0`, `false` or `Null`
    pub fn zero(kind: SemanticKind) -> Self {
        match kind {
            SemanticKind::String => FieldValue::String(String::new()),
            SemanticKind::Integer => FieldValue::Integer(0),
            SemanticKind::Float => FieldValue::Float(0.0),
            SemanticKind::Boolean => FieldValue::Boolean(false),
            SemanticKind::Opaque => FieldValue::Null,
        }
    }

    /// Kind of this value; `Null` reports `Opaque`
    pub fn kind(&self) -> SemanticKind {
        match self {
            FieldValue::Null => SemanticKind::Opaque,
            FieldValue::String(_) => SemanticKind::String,
            FieldValue::Integer(_) => SemanticKind::Integer,
            FieldValue::Float(_) => SemanticKind::Float,
            FieldValue::Boolean(_) => SemanticKind::Boolean,
        }
    }

    /// Check if this is the opaque `Null` value
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// String content, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer content, if this is an integer value
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Float content; integers are not widened
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Boolean content, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert to a JSON value
    pub fn to_json(&self) -> JsonValue {
        match self {
            FieldValue::Null => JsonValue::Null,
            FieldValue::String(s) => JsonValue::String(s.clone()),
            FieldValue::Integer(i) => JsonValue::from(*i),
            FieldValue::Float(f) => JsonValue::from(*f),
            FieldValue::Boolean(b) => JsonValue::Bool(*b),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

/// A value bag with one slot per field of its type
///
/// Owned by the caller; cloning copies every slot.
#[derive(Debug, Clone)]
pub struct Instance {
    ty: Arc<SynthesizedType>,
    slots: Vec<FieldValue>,
}

impl Instance {
    pub(crate) fn with_defaults(ty: Arc<SynthesizedType>) -> Self {
        let slots = ty.shape().iter().map(|f| FieldValue::zero(f.kind)).collect();
        Self { ty, slots }
    }

    /// Handle of the instance's type
    pub fn type_handle(&self) -> &Arc<SynthesizedType> {
        &self.ty
    }

    /// Name of the instance's type
    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    /// Read a field by name
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.ty.shape().position(name).map(|index| &self.slots[index])
    }

    /// Read a field by position
    pub fn get_index(&self, index: usize) -> Option<&FieldValue> {
        self.slots.get(index)
    }

    /// Write a field by name
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        let ty = Arc::clone(&self.ty);
        let accessor = ty
            .accessor(name)
            .ok_or_else(|| Error::unknown_field(ty.name(), name))?;
        accessor.set(self, value.into())
    }

    /// Iterate over (field, value) pairs in field order
    pub fn fields(&self) -> impl Iterator<Item = (&FieldDescriptor, &FieldValue)> {
        self.ty.shape().iter().zip(self.slots.iter())
    }

    /// Convert to a JSON object in field order
    pub fn to_json(&self) -> JsonValue {
        let map: JsonObject = self
            .fields()
            .map(|(field, value)| (field.name.clone(), value.to_json()))
            .collect();
        JsonValue::Object(map)
    }

    pub(crate) fn slot(&self, index: usize) -> &FieldValue {
        &self.slots[index]
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut FieldValue {
        &mut self.slots[index]
    }
}

impl Serialize for Instance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (field, value) in self.fields() {
            map.serialize_entry(&field.name, value)?;
        }
        map.end()
    }
}
