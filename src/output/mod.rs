//! Output module
//!
//! Wraps type-level mapping results in the index mapping document shape:
//!
//! ```json
//! {"mappings": {"company": {"properties": {"name": {"type": "string"}}}}}
//! ```

mod document;

pub use document::{MappingDocument, TypeMapping};
