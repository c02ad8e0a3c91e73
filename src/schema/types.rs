//! Shape types

use serde::{Deserialize, Serialize};

/// Conversion bucket for a JSON value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticKind {
    /// JSON strings
    String,
    /// Numbers that fit exactly in an `i32`
    Integer,
    /// Any other number
    Float,
    /// `true` / `false`
    Boolean,
    /// Null, arrays and nested objects
    Opaque,
}

impl std::fmt::Display for SemanticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SemanticKind::String => write!(f, "string"),
            SemanticKind::Integer => write!(f, "integer"),
            SemanticKind::Float => write!(f, "float"),
            SemanticKind::Boolean => write!(f, "boolean"),
            SemanticKind::Opaque => write!(f, "opaque"),
        }
    }
}

/// A single inferred field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name, exactly as it appeared in the JSON object
    pub name: String,
    /// Semantic kind of the field
    pub kind: SemanticKind,
}

impl FieldDescriptor {
    /// Create a new field descriptor
    pub fn new(name: impl Into<String>, kind: SemanticKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Ordered field list inferred from one JSON object
///
/// Field names are unique (case-sensitive). Order is first appearance in the
/// source object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeDescriptor {
    fields: Vec<FieldDescriptor>,
}

impl ShapeDescriptor {
    /// Create an empty shape
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, or replace the kind of an existing field of the same name
    /// without moving it
    pub fn push(&mut self, field: FieldDescriptor) {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => existing.kind = field.kind,
            None => self.fields.push(field),
        }
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the shape has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in order
    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }

    /// Get a field by name
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get a field by position
    pub fn get_index(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get(index)
    }

    /// Position of a field by name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Field names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Borrow the fields as a slice
    pub fn as_slice(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

impl FromIterator<FieldDescriptor> for ShapeDescriptor {
    fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
        let mut shape = ShapeDescriptor::new();
        for field in iter {
            shape.push(field);
        }
        shape
    }
}

impl<'a> IntoIterator for &'a ShapeDescriptor {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
