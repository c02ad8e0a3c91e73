//! Type synthesis tests

use super::*;
use crate::error::ErrorKind;
use crate::instance::FieldValue;
use crate::schema::{FieldDescriptor, SemanticKind};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

const TEST_TYPE_JSON: &str = r#"
{
    "Id": 1,
    "Name": "Test",
    "IsActive": true,
    "Score": 95.5
}
"#;

// ============================================================================
// create_type Tests
// ============================================================================

#[test]
fn test_create_type_fields() {
    let synthesizer = TypeSynthesizer::default();

    let ty = synthesizer.create_type("TestType", TEST_TYPE_JSON).unwrap();

    assert_eq!(ty.name(), "TestType");
    assert_eq!(ty.field_count(), 4);
    assert_eq!(
        ty.shape().as_slice(),
        &[
            FieldDescriptor::new("Id", SemanticKind::Integer),
            FieldDescriptor::new("Name", SemanticKind::String),
            FieldDescriptor::new("IsActive", SemanticKind::Boolean),
            FieldDescriptor::new("Score", SemanticKind::Float),
        ]
    );
}

#[test]
fn test_create_type_registers_once() {
    let synthesizer = TypeSynthesizer::default();

    synthesizer.create_type("TestType", TEST_TYPE_JSON).unwrap();
    assert_eq!(synthesizer.registry().len(), 1);

    synthesizer.create_type("TestType", TEST_TYPE_JSON).unwrap();
    assert_eq!(synthesizer.registry().len(), 1);
}

#[test]
fn test_create_type_same_name_returns_existing() {
    let synthesizer = TypeSynthesizer::default();

    let first = synthesizer
        .create_type("SameType", r#"{"Id": 1, "Name": "Test1"}"#)
        .unwrap();
    let second = synthesizer
        .create_type("SameType", r#"{"Code": "ABC", "Value": 1.5, "Extra": true}"#)
        .unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.shape().names().collect::<Vec<_>>(), vec!["Id", "Name"]);
}

#[test]
fn test_create_type_existing_name_ignores_new_shape() {
    let synthesizer = TypeSynthesizer::default();
    synthesizer.create_type("Named", r#"{"a": 1}"#).unwrap();

    // A non-object document is never analyzed once the name exists
    let ty = synthesizer.create_type("Named", "[1, 2, 3]").unwrap();
    assert_eq!(ty.field_count(), 1);
}

#[test]
fn test_create_type_existing_name_still_validates_text() {
    let synthesizer = TypeSynthesizer::default();
    synthesizer.create_type("Named", r#"{"a": 1}"#).unwrap();

    let err = synthesizer.create_type("Named", "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);

    let err = synthesizer.create_type("Named", "{ invalid json }").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_create_type_errors() {
    let synthesizer = TypeSynthesizer::default();

    let err = synthesizer.create_type("EmptyType", "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);

    let err = synthesizer.create_type("NullType", None::<&str>).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);

    let err = synthesizer
        .create_type("InvalidType", "{ invalid json }")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);

    let err = synthesizer
        .create_type("ArrayType", r#"["item1", "item2"]"#)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);

    let err = synthesizer.create_type("", r#"{"a": 1}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);

    assert!(synthesizer.registry().is_empty());
}

#[test]
fn test_create_type_from_value() {
    let synthesizer = TypeSynthesizer::default();
    let ty = synthesizer
        .create_type_from_value("FromValue", &json!({"tags": ["a"], "count": 3}))
        .unwrap();

    assert_eq!(ty.field("tags").unwrap().kind, SemanticKind::Opaque);
    assert_eq!(ty.field("count").unwrap().kind, SemanticKind::Integer);
}

#[test]
fn test_synthesizers_share_registry() {
    let first = TypeSynthesizer::default();
    let second = TypeSynthesizer::new(Arc::clone(first.registry()));

    let a = first.create_type("Shared", r#"{"x": 1}"#).unwrap();
    let b = second.create_type("Shared", r#"{"y": 2}"#).unwrap();

    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_synthesized_type_serializes_descriptor() {
    let synthesizer = TypeSynthesizer::default();
    let ty = synthesizer
        .create_type("Pair", r#"{"Key": "k", "Value": null}"#)
        .unwrap();

    assert_eq!(
        serde_json::to_value(ty.as_ref()).unwrap(),
        json!({
            "name": "Pair",
            "fields": [
                {"name": "Key", "kind": "string"},
                {"name": "Value", "kind": "opaque"}
            ]
        })
    );
}

// ============================================================================
// Accessor Tests
// ============================================================================

#[test]
fn test_new_instance_has_zero_values() {
    let synthesizer = TypeSynthesizer::default();
    let ty = synthesizer
        .create_type(
            "Zeroes",
            r#"{"s": "x", "i": 5, "f": 2.5, "b": true, "o": [1]}"#,
        )
        .unwrap();

    let instance = ty.new_instance();

    assert_eq!(instance.get("s"), Some(&FieldValue::String(String::new())));
    assert_eq!(instance.get("i"), Some(&FieldValue::Integer(0)));
    assert_eq!(instance.get("f"), Some(&FieldValue::Float(0.0)));
    assert_eq!(instance.get("b"), Some(&FieldValue::Boolean(false)));
    assert_eq!(instance.get("o"), Some(&FieldValue::Null));
}

#[test]
fn test_accessors_in_field_order() {
    let synthesizer = TypeSynthesizer::default();
    let ty = synthesizer.create_type("TestType", TEST_TYPE_JSON).unwrap();

    let accessors: Vec<_> = ty
        .accessors()
        .map(|a| (a.index(), a.name(), a.kind()))
        .collect();

    assert_eq!(
        accessors,
        vec![
            (0, "Id", SemanticKind::Integer),
            (1, "Name", SemanticKind::String),
            (2, "IsActive", SemanticKind::Boolean),
            (3, "Score", SemanticKind::Float),
        ]
    );
    assert!(ty.accessor("Missing").is_none());
}

#[test]
fn test_accessor_read_write() {
    let synthesizer = TypeSynthesizer::default();
    let ty = synthesizer
        .create_type("ModifiableType", r#"{"Name": "Original", "Value": 100}"#)
        .unwrap();
    let mut instance = ty.new_instance();

    let name = ty.accessor("Name").unwrap();
    let value = ty.accessor("Value").unwrap();

    name.set(&mut instance, FieldValue::from("Modified")).unwrap();
    value.set(&mut instance, FieldValue::from(200)).unwrap();

    assert_eq!(name.get(&instance).unwrap().as_str(), Some("Modified"));
    assert_eq!(value.get(&instance).unwrap().as_i32(), Some(200));
}

#[test]
fn test_accessor_rejects_wrong_kind() {
    let synthesizer = TypeSynthesizer::default();
    let ty = synthesizer.create_type("Typed", r#"{"Value": 100}"#).unwrap();
    let mut instance = ty.new_instance();

    let err = ty
        .accessor("Value")
        .unwrap()
        .set(&mut instance, FieldValue::from("text"))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Field);
    assert_eq!(instance.get("Value"), Some(&FieldValue::Integer(0)));
}

#[test]
fn test_accessor_rejects_foreign_instance() {
    let synthesizer = TypeSynthesizer::default();
    let first = synthesizer.create_type("First", r#"{"Id": 1}"#).unwrap();
    let second = synthesizer.create_type("Second", r#"{"Id": 1}"#).unwrap();
    let instance = second.new_instance();

    let err = first.accessor("Id").unwrap().get(&instance).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Field);
    assert!(err.to_string().contains("First"));
}
