//! Tests for TypeRegistry

use super::*;
use crate::error::{Error, ErrorKind};
use crate::schema::{FieldDescriptor, SemanticKind, ShapeDescriptor};
use crate::synth::SynthesizedType;
use std::sync::{Arc, Barrier};
use std::thread;

fn make_type(name: &str) -> SynthesizedType {
    let shape: ShapeDescriptor = [FieldDescriptor::new("Id", SemanticKind::Integer)]
        .into_iter()
        .collect();
    SynthesizedType::new(name, shape)
}

fn insert(registry: &TypeRegistry, ty: SynthesizedType) -> Arc<SynthesizedType> {
    let name = ty.name().to_string();
    registry.get_or_insert_with(&name, || Ok(ty)).unwrap().0
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[test]
fn test_new_registry_is_empty() {
    let registry = TypeRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.lookup("Anything").is_none());
    assert!(registry.all_types().is_empty());
}

#[test]
fn test_insert_and_lookup() {
    let registry = TypeRegistry::new();
    let registered = insert(&registry, make_type("Person"));

    let found = registry.lookup("Person").unwrap();
    assert!(Arc::ptr_eq(&registered, &found));
    assert!(registry.contains("Person"));
    assert!(!registry.contains("person"));
}

#[test]
fn test_insert_existing_name_keeps_first() {
    let registry = TypeRegistry::new();
    let first = insert(&registry, make_type("Person"));
    let second = insert(&registry, SynthesizedType::new("Person", ShapeDescriptor::new()));

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.len(), 1);
    assert_eq!(second.shape().len(), 1);
}

#[test]
fn test_all_types_in_registration_order() {
    let registry = TypeRegistry::new();
    insert(&registry, make_type("Zeta"));
    insert(&registry, make_type("Alpha"));
    insert(&registry, make_type("Mid"));

    assert_eq!(registry.names(), vec!["Zeta", "Alpha", "Mid"]);
    let names: Vec<_> = registry
        .all_types()
        .iter()
        .map(|t| t.name().to_string())
        .collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
}

// ============================================================================
// Insert-if-absent Tests
// ============================================================================

#[test]
fn test_get_or_insert_with_builds_once() {
    let registry = TypeRegistry::new();

    let (first, created) = registry
        .get_or_insert_with("Person", || Ok(make_type("Person")))
        .unwrap();
    assert!(created);

    let (second, created) = registry
        .get_or_insert_with("Person", || panic!("must not rebuild"))
        .unwrap();
    assert!(!created);
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_get_or_insert_with_failure_registers_nothing() {
    let registry = TypeRegistry::new();

    let err = registry
        .get_or_insert_with("Broken", || Err(Error::shape("array")))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Shape);
    assert!(registry.is_empty());
    assert!(!registry.contains("Broken"));
}

#[test]
fn test_get_or_insert_with_rejects_misnamed_type() {
    let registry = TypeRegistry::new();
    let result = registry.get_or_insert_with("Person", || Ok(make_type("Other")));
    assert!(result.is_err());
    assert!(registry.is_empty());
}

#[test]
fn test_concurrent_insert_same_name() {
    const THREADS: usize = 16;
    let registry = Arc::new(TypeRegistry::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry
                    .get_or_insert_with("X", || Ok(make_type("X")))
                    .unwrap()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results.iter().filter(|(_, created)| *created).count(), 1);
    let first = &results[0].0;
    assert!(results.iter().all(|(ty, _)| Arc::ptr_eq(ty, first)));
    assert_eq!(registry.len(), 1);
}
