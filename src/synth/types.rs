//! Synthesized type handles

use crate::error::{Error, Result};
use crate::instance::{FieldValue, Instance};
use crate::schema::{FieldDescriptor, SemanticKind, ShapeDescriptor};
use serde::Serialize;
use std::sync::Arc;

/// A named structured type created at run time
///
/// Immutable once built. Identity is the shared handle: two
/// `Arc<SynthesizedType>` refer to the same type iff `Arc::ptr_eq` holds.
#[derive(Debug, Serialize)]
pub struct SynthesizedType {
    name: String,
    fields: ShapeDescriptor,
}

impl SynthesizedType {
    pub(crate) fn new(name: impl Into<String>, fields: ShapeDescriptor) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered field descriptors
    pub fn shape(&self) -> &ShapeDescriptor {
        &self.fields
    }

    /// Number of fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Get a field descriptor by name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    /// Get the read/write accessor for a field
    pub fn accessor(&self, name: &str) -> Option<FieldAccessor<'_>> {
        let index = self.fields.position(name)?;
        Some(FieldAccessor {
            owner: self,
            index,
            field: &self.fields.as_slice()[index],
        })
    }

    /// Accessors for every field, in field order
    pub fn accessors(&self) -> impl Iterator<Item = FieldAccessor<'_>> {
        self.fields
            .iter()
            .enumerate()
            .map(move |(index, field)| FieldAccessor {
                owner: self,
                index,
                field,
            })
    }

    /// Construct an instance with every field at its kind's zero value
    pub fn new_instance(self: &Arc<Self>) -> Instance {
        Instance::with_defaults(Arc::clone(self))
    }
}

/// Public read/write access to one field of a synthesized type
#[derive(Debug, Clone, Copy)]
pub struct FieldAccessor<'a> {
    owner: &'a SynthesizedType,
    index: usize,
    field: &'a FieldDescriptor,
}

impl<'a> FieldAccessor<'a> {
    /// Field name
    pub fn name(&self) -> &'a str {
        &self.field.name
    }

    /// Field kind
    pub fn kind(&self) -> SemanticKind {
        self.field.kind
    }

    /// Slot position within instances of the owning type
    pub fn index(&self) -> usize {
        self.index
    }

    /// Read the field from an instance of the owning type
    pub fn get<'i>(&self, instance: &'i Instance) -> Result<&'i FieldValue> {
        self.check_owner(instance)?;
        Ok(instance.slot(self.index))
    }

    /// Write the field on an instance of the owning type
    ///
    /// The value must be of the field's kind; `Null` is only accepted by
    /// opaque fields.
    pub fn set(&self, instance: &mut Instance, value: FieldValue) -> Result<()> {
        self.check_owner(instance)?;
        if value.kind() != self.field.kind {
            return Err(Error::kind_mismatch(
                self.name(),
                self.field.kind,
                value.kind(),
            ));
        }
        *instance.slot_mut(self.index) = value;
        Ok(())
    }

    fn check_owner(&self, instance: &Instance) -> Result<()> {
        if std::ptr::eq(instance.type_handle().as_ref(), self.owner) {
            Ok(())
        } else {
            Err(Error::TypeMismatch {
                expected: self.owner.name().to_string(),
                actual: instance.type_name().to_string(),
            })
        }
    }
}
