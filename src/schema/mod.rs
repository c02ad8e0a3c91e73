//! Shape analysis module
//!
//! Infers an ordered field list from the top level of a JSON object.
//!
//! # Classification
//!
//! | JSON value                       | Kind      |
//! |----------------------------------|-----------|
//! | string                           | `String`  |
//! | true / false                     | `Boolean` |
//! | number that fits an `i32` exactly| `Integer` |
//! | any other number                 | `Float`   |
//! | null, array, object              | `Opaque`  |

mod inference;
mod types;

pub(crate) use inference::as_i32;
pub use inference::{analyze, classify_value, expect_object, json_kind_name, parse_document};
pub use types::{FieldDescriptor, SemanticKind, ShapeDescriptor};
