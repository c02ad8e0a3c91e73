//! Dynamic type provider
//!
//! The long-lived service object hosts construct once at startup and share
//! with every request handler. Clones share one registry.

use crate::config::ProviderConfig;
use crate::error::{Result, ResultExt};
use crate::instance::{Instance, InstanceMaterializer};
use crate::registry::TypeRegistry;
use crate::synth::{SynthesizedType, TypeSynthesizer};
use std::sync::Arc;
use tracing::info;

/// Name used when a caller does not name the type
pub const DEFAULT_TYPE_NAME: &str = "DynamicType";

/// Creates types and instances from JSON and exposes the synthesized types
#[derive(Debug, Clone)]
pub struct DynamicTypeProvider {
    materializer: InstanceMaterializer,
    default_type_name: String,
}

impl Default for DynamicTypeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicTypeProvider {
    /// Create a provider with an empty registry
    pub fn new() -> Self {
        Self::with_registry(Arc::new(TypeRegistry::new()))
    }

    /// Create a provider on top of an existing registry
    pub fn with_registry(registry: Arc<TypeRegistry>) -> Self {
        Self {
            materializer: InstanceMaterializer::new(TypeSynthesizer::new(registry)),
            default_type_name: DEFAULT_TYPE_NAME.to_string(),
        }
    }

    /// Create a provider from configuration, registering every seed type in
    /// declaration order
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        config.validate()?;

        let mut provider = Self::new();
        provider.default_type_name = config.default_type_name.clone();

        for seed in &config.seeds {
            let sample = config.load_seed_sample(seed)?;
            let ty = provider
                .synthesizer()
                .create_type_from_value(&seed.name, &sample)
                .with_context(|| format!("Seed type '{}'", seed.name))?;
            info!(
                type_name = ty.name(),
                fields = ty.field_count(),
                "Registered seed type"
            );
        }

        Ok(provider)
    }

    /// Create a type from JSON text, or return the type already registered
    /// under `name`
    pub fn create_type<'a>(
        &self,
        name: &str,
        json: impl Into<Option<&'a str>>,
    ) -> Result<Arc<SynthesizedType>> {
        self.synthesizer().create_type(name, json)
    }

    /// Create a populated instance of the type named `name`
    pub fn create_instance<'a>(
        &self,
        name: &str,
        json: impl Into<Option<&'a str>>,
    ) -> Result<Instance> {
        self.materializer.create_instance(name, json)
    }

    /// Look up a synthesized type by name
    pub fn lookup(&self, name: &str) -> Option<Arc<SynthesizedType>> {
        self.registry().lookup(name)
    }

    /// All synthesized types in registration order
    pub fn all_types(&self) -> Vec<Arc<SynthesizedType>> {
        self.registry().all_types()
    }

    /// Name used when a caller does not name the type
    pub fn default_type_name(&self) -> &str {
        &self.default_type_name
    }

    /// The shared registry
    pub fn registry(&self) -> &Arc<TypeRegistry> {
        self.synthesizer().registry()
    }

    /// The underlying synthesizer
    pub fn synthesizer(&self) -> &TypeSynthesizer {
        self.materializer.synthesizer()
    }

    /// The underlying materializer
    pub fn materializer(&self) -> &InstanceMaterializer {
        &self.materializer
    }
}
