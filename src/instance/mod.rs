//! Instance materialization module
//!
//! Produces value-bag instances of synthesized types and fills them from
//! JSON documents.
//!
//! # Conversion
//!
//! - string field ← JSON string, verbatim
//! - integer field ← JSON number that fits an `i32`
//! - float field ← JSON number, as `f64`
//! - boolean field ← `true` / `false`
//! - opaque field ← null, array or object, stored as `Null`
//! - JSON `null` on a typed field resets it to its zero value
//! - anything else is stored as the value's raw JSON text

mod materializer;
mod types;

pub use materializer::InstanceMaterializer;
pub use types::{FieldValue, Instance};
