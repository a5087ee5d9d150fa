// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # AutoMap
//!
//! Type-driven schema inference for document index mappings.
//!
//! Given a type description, AutoMap walks its fields, infers a wire kind
//! for each, applies declarative configuration and visitor hooks, recurses
//! into complex fields under a per-type repeat limit, and merges explicit
//! overrides on top.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use automap::{load_types_from_str, AutoMapper, MappingDocument, Result};
//!
//! fn main() -> Result<()> {
//!     let registry = load_types_from_str(include_str!("types.yaml"))?;
//!     let mapper = AutoMapper::new(&registry).with_max_repeat(2);
//!
//!     let node = mapper.automap("Company")?;
//!     let document = MappingDocument::new().with_mapping("company", node)?;
//!     println!("{}", document.to_json_pretty());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        AutoMapper                            │
//! │  automap(type) → SchemaNode    automap_with(type, overrides) │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌────────────┬────────────┬───┴────────┬────────────┬──────────┐
//! │ Descriptor │  Inference │  Visitor   │   Guard    │ Override │
//! ├────────────┼────────────┼────────────┼────────────┼──────────┤
//! │ Registry   │ Kind table │ Field hook │ Per-type   │ Whole-   │
//! │ Document   │ Config     │ Node hooks │ repeat     │ field    │
//! │ YAML       │ overlay    │            │ count      │ merge    │
//! └────────────┴────────────┴────────────┴────────────┴──────────┘
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

/// Common types and type aliases
pub mod types;

/// Field naming conventions
pub mod naming;

/// Mapping settings (naming, ignore and rename rules)
pub mod config;

/// Type descriptors and readers
pub mod descriptor;

/// Schema nodes and kind inference
pub mod schema;

/// Visitor hooks
pub mod visitor;

/// Mapping orchestrator, recursion guard and overrides
pub mod automap;

/// YAML loader for type definitions
pub mod loader;

/// Mapping document output
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use automap::{AutoMapper, OverrideSpec};
pub use config::MappingSettings;
pub use descriptor::{Document, FieldDescriptor, TypeDescriptor, TypeReader, TypeRegistry, ValueKind};
pub use loader::{load_types, load_types_from_str};
pub use naming::NamingConvention;
pub use output::MappingDocument;
pub use schema::{NodeKind, SchemaNode};
pub use visitor::{NoopVisitor, PropertyVisitor, VisitorPipeline};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
