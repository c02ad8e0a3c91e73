//! Error types for keystone-types
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for keystone-types
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Errors
    // ============================================================================
    /// JSON text was absent, empty or whitespace only
    #[error("JSON text cannot be null or empty")]
    Input,

    /// JSON text was not well-formed
    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed JSON whose top-level value is not an object
    #[error("Root JSON element must be an object, found {found}")]
    Shape {
        /// Kind of the top-level value
        found: &'static str,
    },

    /// Type name was empty
    #[error("Type name cannot be empty")]
    EmptyTypeName,

    // ============================================================================
    // Instance Errors
    // ============================================================================
    /// Field name not declared by the instance's type
    #[error("Type '{type_name}' has no field '{field}'")]
    UnknownField {
        /// Name of the instance's type
        type_name: String,
        /// Requested field
        field: String,
    },

    /// Value written to a field of a different kind
    #[error("Field '{field}' expects {expected}, got {actual}")]
    FieldKindMismatch {
        /// Field written to
        field: String,
        /// Declared kind of the field
        expected: String,
        /// Kind of the rejected value
        actual: String,
    },

    /// Accessor of one type applied to an instance of another
    #[error("Accessor for type '{expected}' used on an instance of '{actual}'")]
    TypeMismatch {
        /// Type the accessor belongs to
        expected: String,
        /// Type of the instance
        actual: String,
    },

    // ============================================================================
    // Export Errors
    // ============================================================================
    /// Type or field name that GraphQL cannot express
    #[error("Invalid GraphQL {item} name '{name}'")]
    InvalidName {
        /// `type` or `field`
        item: &'static str,
        /// Offending name
        name: String,
    },

    /// Value could not be rendered as JSON
    #[error("Failed to serialize JSON: {0}")]
    Serialize(serde_json::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid provider configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong
        message: String,
    },

    /// Configuration file was not valid YAML
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Referenced file does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path as given
        path: String,
    },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Error raised while processing a named item (seed, file)
    #[error("{context}: {source}")]
    Context {
        /// What was being processed
        context: String,
        /// Underlying error
        source: Box<Error>,
    },

    /// Anything else
    #[error("{0}")]
    Other(String),
}

/// Coarse classification of an [`Error`], for hosts that map failures onto
/// their own rejection types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty or absent JSON text
    Input,
    /// Malformed JSON syntax
    Parse,
    /// Well-formed JSON whose top-level value is not an object
    Shape,
    /// Bad field access on an instance
    Field,
    /// Catalog could not be rendered
    Export,
    /// Invalid configuration
    Config,
    /// Filesystem failure
    Io,
    /// Anything else
    Other,
}

impl Error {
    /// Create a shape error for a top-level value of the given kind
    pub fn shape(found: &'static str) -> Self {
        Self::Shape { found }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unknown field error
    pub fn unknown_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    /// Create a field kind mismatch error
    pub fn kind_mismatch(
        field: impl Into<String>,
        expected: impl ToString,
        actual: impl ToString,
    ) -> Self {
        Self::FieldKindMismatch {
            field: field.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create an invalid GraphQL name error
    pub fn invalid_name(item: &'static str, name: impl Into<String>) -> Self {
        Self::InvalidName {
            item,
            name: name.into(),
        }
    }

    /// Classify this error; context wrappers report the kind of the error
    /// they wrap
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Input | Error::EmptyTypeName => ErrorKind::Input,
            Error::Parse(_) => ErrorKind::Parse,
            Error::Shape { .. } => ErrorKind::Shape,
            Error::UnknownField { .. }
            | Error::FieldKindMismatch { .. }
            | Error::TypeMismatch { .. } => ErrorKind::Field,
            Error::InvalidName { .. } | Error::Serialize(_) => ErrorKind::Export,
            Error::Config { .. } | Error::YamlParse(_) => ErrorKind::Config,
            Error::Io(_) | Error::FileNotFound { .. } => ErrorKind::Io,
            Error::Context { source, .. } => source.kind(),
            Error::Other(_) => ErrorKind::Other,
        }
    }
}

/// Result type alias for keystone-types
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Name what was being processed when the error occurred
    ///
    /// The wrapped error keeps its [`ErrorKind`].
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
