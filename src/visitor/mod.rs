//! Property visitor module
//!
//! Extension point invoked while a schema tree is built. A visitor can act
//! at two points for every mapped field:
//!
//! - **Field hook**: sees the raw [`FieldDescriptor`] before inference and may
//!   return a complete replacement node, bypassing inference and recursion
//! - **Node hooks**: see the finished node (one method per kind) and may
//!   change its settings in place
//!
//! [`NoopVisitor`] does nothing. [`VisitorPipeline`] holds closures
//! registered per kind and runs them in registration order.

mod pipeline;

pub use pipeline::{FieldHook, NodeHook, VisitorPipeline};

use crate::descriptor::FieldDescriptor;
use crate::schema::{KindTag, SchemaNode};

/// Visitor consulted while mapping fields
///
/// Every method defaults to a no-op. Shared visitors must be safe for
/// concurrent use; any interior state needs its own synchronization.
pub trait PropertyVisitor: Send + Sync {
    /// Replace a field's node before inference
    fn visit_field(&self, _field: &FieldDescriptor) -> Option<SchemaNode> {
        None
    }

    /// Called for string nodes
    fn visit_string(&self, _node: &mut SchemaNode, _field: &FieldDescriptor) {}

    /// Called for number nodes
    fn visit_number(&self, _node: &mut SchemaNode, _field: &FieldDescriptor) {}

    /// Called for boolean nodes
    fn visit_boolean(&self, _node: &mut SchemaNode, _field: &FieldDescriptor) {}

    /// Called for date nodes
    fn visit_date(&self, _node: &mut SchemaNode, _field: &FieldDescriptor) {}

    /// Called for object nodes
    fn visit_object(&self, _node: &mut SchemaNode, _field: &FieldDescriptor) {}

    /// Called for nested nodes
    fn visit_nested(&self, _node: &mut SchemaNode, _field: &FieldDescriptor) {}

    /// Called for caller-declared kinds
    fn visit_custom(&self, _node: &mut SchemaNode, _field: &FieldDescriptor) {}
}

/// Visitor with no hooks
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopVisitor;

impl PropertyVisitor for NoopVisitor {}

/// Dispatch the node hook matching the node's kind
pub fn apply_node_hooks(
    visitor: &dyn PropertyVisitor,
    node: &mut SchemaNode,
    field: &FieldDescriptor,
) {
    match node.kind.tag() {
        KindTag::String => visitor.visit_string(node, field),
        KindTag::Number => visitor.visit_number(node, field),
        KindTag::Boolean => visitor.visit_boolean(node, field),
        KindTag::Date => visitor.visit_date(node, field),
        KindTag::Object => visitor.visit_object(node, field),
        KindTag::Nested => visitor.visit_nested(node, field),
        KindTag::Custom => visitor.visit_custom(node, field),
    }
}
