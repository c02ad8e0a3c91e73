//! Common type aliases used throughout keystone-types

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
///
/// Iterates in source order (serde_json `preserve_order`).
pub type JsonObject = serde_json::Map<String, JsonValue>;
