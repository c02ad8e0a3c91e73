//! CLI module
//!
//! Command-line interface for inspecting synthesized types.
//!
//! # Commands
//!
//! - `shape` - Synthesize a type from a JSON object
//! - `instance` - Materialize an instance from a JSON object
//! - `catalog` - Print every registered type

mod commands;
mod runner;

pub use commands::{Cli, Commands, DocumentArgs, OutputFormat};
pub use runner::Runner;
