//! Provider configuration
//!
//! Loaded from YAML (or JSON, which YAML accepts). Seeds are types
//! registered when the provider starts, so they exist before the first request.
//!
//! ```yaml
//! default_type_name: Record
//! seeds:
//!   - name: User
//!     sample: { "Id": 1, "Email": "a@example.com", "Active": true }
//!   - name: Order
//!     sample_file: samples/order.json
//! ```

use crate::error::{Error, Result};
use crate::provider::DEFAULT_TYPE_NAME;
use crate::schema::parse_document;
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Type name used when a caller supplies none
    #[serde(default = "default_type_name")]
    pub default_type_name: String,

    /// Types to register at startup, in order
    #[serde(default)]
    pub seeds: Vec<SeedType>,

    /// Directory relative `sample_file` paths resolve against
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn default_type_name() -> String {
    DEFAULT_TYPE_NAME.to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            default_type_name: default_type_name(),
            seeds: Vec::new(),
            base_dir: None,
        }
    }
}

/// A type registered at startup from a sample document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedType {
    /// Type name
    pub name: String,

    /// Inline sample object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample: Option<JsonValue>,

    /// Path to a JSON file holding the sample object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_file: Option<PathBuf>,
}

impl SeedType {
    /// Seed with an inline sample
    pub fn inline(name: impl Into<String>, sample: JsonValue) -> Self {
        Self {
            name: name.into(),
            sample: Some(sample),
            sample_file: None,
        }
    }

    /// Seed read from a JSON file
    pub fn from_file(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            sample: None,
            sample_file: Some(path.into()),
        }
    }
}

impl ProviderConfig {
    /// Load configuration from a YAML or JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {e}",
                path.display()
            ))
        })?;

        let mut config = Self::from_yaml_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Parse configuration from a YAML or JSON string
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: ProviderConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check names and seed sources
    pub fn validate(&self) -> Result<()> {
        if self.default_type_name.trim().is_empty() {
            return Err(Error::config("default_type_name cannot be empty"));
        }

        let mut seen = HashSet::new();
        for seed in &self.seeds {
            if seed.name.is_empty() {
                return Err(Error::config("Seed type name cannot be empty"));
            }
            if !seen.insert(seed.name.as_str()) {
                return Err(Error::config(format!(
                    "Duplicate seed type '{}'",
                    seed.name
                )));
            }
            match (&seed.sample, &seed.sample_file) {
                (Some(_), None) | (None, Some(_)) => {}
                (None, None) => {
                    return Err(Error::config(format!(
                        "Seed type '{}' needs either sample or sample_file",
                        seed.name
                    )))
                }
                (Some(_), Some(_)) => {
                    return Err(Error::config(format!(
                        "Seed type '{}' has both sample and sample_file",
                        seed.name
                    )))
                }
            }
        }

        Ok(())
    }

    /// Resolve a seed's sample document
    pub fn load_seed_sample(&self, seed: &SeedType) -> Result<JsonValue> {
        if let Some(sample) = &seed.sample {
            return Ok(sample.clone());
        }

        let path = seed.sample_file.as_ref().ok_or_else(|| {
            Error::config(format!("Seed type '{}' has no sample", seed.name))
        })?;
        let path = self.resolve_path(path);
        read_json_file(&path)
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Read and parse a JSON document from disk
pub fn read_json_file(path: &Path) -> Result<JsonValue> {
    let text = read_text_file(path)?;
    parse_document(Some(&text))
}

/// Read a text file, mapping a missing file to [`Error::FileNotFound`]
pub fn read_text_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })
}
