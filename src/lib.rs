// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # keystone-types
//!
//! Run-time synthesis of named structured types from the shape of JSON
//! objects, and materialization of instances of those types from JSON values.
//! Lets a host (e.g. a GraphQL server) extend its schema without declaring
//! types ahead of time.
//!
//! ## Quick Start
//!
//! ```rust
//! use keystone_types::DynamicTypeProvider;
//!
//! let provider = DynamicTypeProvider::new();
//! let json = r#"{"Id": 1, "Name": "Test", "IsActive": true, "Score": 95.5}"#;
//!
//! let ty = provider.create_type("TestType", json)?;
//! assert_eq!(ty.field_count(), 4);
//!
//! let instance = provider.create_instance("TestType", json)?;
//! assert_eq!(instance.get("Score").and_then(|v| v.as_f64()), Some(95.5));
//!
//! assert_eq!(provider.all_types().len(), 1);
//! # Ok::<(), keystone_types::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    DynamicTypeProvider                       │
//! │   create_type()      create_instance()      all_types()      │
//! └──────────────────────────────────────────────────────────────┘
//!            │                    │                    │
//! ┌──────────┴────────┬───────────┴──────────┬─────────┴─────────┐
//! │  TypeSynthesizer  │ InstanceMaterializer │   TypeRegistry    │
//! ├───────────────────┼──────────────────────┼───────────────────┤
//! │ memoize by name   │ default instance     │ name → type       │
//! │ build from shape  │ convert per kind     │ append-only       │
//! └───────────────────┴──────────────────────┴───────────────────┘
//!            │                    │
//! ┌──────────┴────────────────────┴──────────────────────────────┐
//! │              Shape analysis (schema::analyze)                │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common type aliases
pub mod types;

/// Shape analysis of JSON objects
pub mod schema;

/// Append-only registry of synthesized types
pub mod registry;

/// Type synthesis from JSON shapes
pub mod synth;

/// Instance materialization from JSON values
pub mod instance;

/// Service object tying the components together
pub mod provider;

/// Provider configuration
pub mod config;

/// JSON catalog and GraphQL SDL export
pub mod export;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, ErrorKind, Result};
pub use instance::{FieldValue, Instance, InstanceMaterializer};
pub use provider::DynamicTypeProvider;
pub use registry::TypeRegistry;
pub use schema::{FieldDescriptor, SemanticKind, ShapeDescriptor};
pub use synth::{FieldAccessor, SynthesizedType, TypeSynthesizer};
