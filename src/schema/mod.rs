//! Schema module
//!
//! Schema nodes and the default inference table.
//!
//! # Features
//!
//! - **Kind Inference**: Maps declared value kinds to default node shapes
//! - **Declarative Overlay**: Applies per-field configuration over inferred defaults
//! - **Wire Shape**: Nodes serialize with a `type` discriminator, flattened
//!   settings and a `properties` child mapping

mod inference;
mod types;

pub(crate) use inference::validate_setting_key;
pub use inference::{infer, infer_field, overlay_config};
pub use types::{KindTag, NodeKind, NumberType, Properties, SchemaNode, RESERVED_KEYS};
