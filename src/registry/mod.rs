//! Type registry module
//!
//! The single source of truth for which type names have been synthesized.
//! Shared by reference between the synthesizer and anything that needs to
//! enumerate the synthesized types (e.g. a schema builder).

mod store;

pub use store::TypeRegistry;

#[cfg(test)]
mod tests;
