//! Type synthesizer implementation

use super::types::SynthesizedType;
use crate::error::{Error, Result};
use crate::registry::TypeRegistry;
use crate::schema::{analyze, parse_document};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Builds named types from JSON shapes, memoized by name
#[derive(Debug, Clone)]
pub struct TypeSynthesizer {
    registry: Arc<TypeRegistry>,
}

impl Default for TypeSynthesizer {
    fn default() -> Self {
        Self::new(Arc::new(TypeRegistry::new()))
    }
}

impl TypeSynthesizer {
    /// Create a synthesizer that registers into the given registry
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self { registry }
    }

    /// The registry backing this synthesizer
    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    /// Create a type from JSON text, or return the type already registered
    /// under `name`
    ///
    /// The text must be non-empty, well-formed JSON. When `name` is already
    /// registered the document's shape is not inspected at all.
    pub fn create_type<'a>(
        &self,
        name: &str,
        json: impl Into<Option<&'a str>>,
    ) -> Result<Arc<SynthesizedType>> {
        let document = parse_document(json.into())?;
        self.create_type_from_value(name, &document)
    }

    /// Same as [`create_type`](Self::create_type) for an already parsed
    /// document
    pub fn create_type_from_value(
        &self,
        name: &str,
        document: &Value,
    ) -> Result<Arc<SynthesizedType>> {
        if name.is_empty() {
            return Err(Error::EmptyTypeName);
        }

        let (ty, created) = self.registry.get_or_insert_with(name, || {
            let shape = analyze(document)?;
            Ok(SynthesizedType::new(name, shape))
        })?;

        if created {
            debug!(
                type_name = name,
                fields = ty.field_count(),
                "Synthesized new type"
            );
        } else {
            debug!(type_name = name, "Returning existing type");
        }

        Ok(ty)
    }
}
