//! Type synthesis module
//!
//! Turns a JSON shape into a named, immutable structured type. A type is
//! created once per distinct name and reused for every later request with
//! that name, whatever shape the later document has.
//!
//! A synthesized type is a descriptor plus a value-bag instance layout: each
//! field has a slot, a public [`FieldAccessor`] for reading and writing it,
//! and a zero value used by [`SynthesizedType::new_instance`].

mod synthesizer;
mod types;

pub use synthesizer::TypeSynthesizer;
pub use types::{FieldAccessor, SynthesizedType};

#[cfg(test)]
mod tests;
