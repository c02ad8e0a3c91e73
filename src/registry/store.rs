//! Type registry implementation
//!
//! Append-only name → type store with an atomic insert-if-absent path.

use crate::error::{Error, Result};
use crate::synth::SynthesizedType;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct RegistryInner {
    /// Name → position in `types`
    by_name: HashMap<String, usize>,
    /// Types in registration order
    types: Vec<Arc<SynthesizedType>>,
}

/// Registry of synthesized types
///
/// Each name moves from absent to registered at most once and never back.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    inner: RwLock<RegistryInner>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    // Entries are never mutated after insertion, so a poisoned lock still
    // guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, RegistryInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a type by name
    pub fn lookup(&self, name: &str) -> Option<Arc<SynthesizedType>> {
        let inner = self.read();
        inner
            .by_name
            .get(name)
            .map(|&index| Arc::clone(&inner.types[index]))
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.read().by_name.contains_key(name)
    }

    /// All types in registration order
    pub fn all_types(&self) -> Vec<Arc<SynthesizedType>> {
        self.read().types.clone()
    }

    /// Registered names in registration order
    pub fn names(&self) -> Vec<String> {
        self.read()
            .types
            .iter()
            .map(|t| t.name().to_string())
            .collect()
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.read().types.len()
    }

    /// Check if no types are registered
    pub fn is_empty(&self) -> bool {
        self.read().types.is_empty()
    }

    /// Return the type registered under `name`, or build and register one
    ///
    /// The check and the insert run under one write lock, so concurrent first
    /// requests for the same name build exactly one type. The returned flag is
    /// `true` when this call created the entry. If `build` fails nothing is
    /// registered.
    pub(crate) fn get_or_insert_with<F>(
        &self,
        name: &str,
        build: F,
    ) -> Result<(Arc<SynthesizedType>, bool)>
    where
        F: FnOnce() -> Result<SynthesizedType>,
    {
        if let Some(existing) = self.lookup(name) {
            return Ok((existing, false));
        }

        let mut inner = self.write();
        if let Some(&index) = inner.by_name.get(name) {
            return Ok((Arc::clone(&inner.types[index]), false));
        }

        let ty = build()?;
        if ty.name() != name {
            return Err(Error::Other(format!(
                "Type built for '{name}' is named '{}'",
                ty.name()
            )));
        }
        Ok((insert(&mut inner, ty), true))
    }
}

fn insert(inner: &mut RegistryInner, ty: SynthesizedType) -> Arc<SynthesizedType> {
    let ty = Arc::new(ty);
    inner.by_name.insert(ty.name().to_string(), inner.types.len());
    inner.types.push(Arc::clone(&ty));
    ty
}
