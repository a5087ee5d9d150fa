//! Type descriptor module
//!
//! Describes the structural fields of a type: identifier, declared value
//! kind, nested type for complex fields, declarative mapping configuration,
//! and the declared ignore flag.
//!
//! # Sources
//!
//! - **Rust types**: implement [`Document`] and register with [`TypeRegistry::register`]
//! - **Data**: load YAML definitions with [`crate::loader`]
//! - **Custom**: implement [`TypeReader`] over any metadata facility

mod kind;
mod reader;
mod types;

pub use kind::{Document, FieldKind};
pub use reader::{TypeReader, TypeRegistry};
pub use types::{FieldConfig, FieldDescriptor, TypeDescriptor, ValueKind};

#[cfg(test)]
mod tests;
