//! Shared pieces of the rsprobe toolset.
//!
//! Currently this is just the relaxed JSON encoding used to turn opaque
//! driver replies into the single stdout line the CLI prints.

pub mod relaxed;

pub use relaxed::{bson_to_value, document_to_value};
