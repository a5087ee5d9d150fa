//! Closure-based visitor

use super::PropertyVisitor;
use crate::descriptor::FieldDescriptor;
use crate::schema::{KindTag, SchemaNode};
use std::fmt;

/// Field hook: may return a replacement node
pub type FieldHook = Box<dyn Fn(&FieldDescriptor) -> Option<SchemaNode> + Send + Sync>;

/// Node hook: may change a node in place
pub type NodeHook = Box<dyn Fn(&mut SchemaNode, &FieldDescriptor) + Send + Sync>;

/// Ordered hook table keyed by kind
///
/// Field hooks run in registration order and the first replacement wins.
/// Node hooks registered for a kind all run, in registration order.
#[derive(Default)]
pub struct VisitorPipeline {
    field_hooks: Vec<FieldHook>,
    node_hooks: Vec<(KindTag, NodeHook)>,
}

impl VisitorPipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field hook
    #[must_use]
    pub fn on_field(
        mut self,
        hook: impl Fn(&FieldDescriptor) -> Option<SchemaNode> + Send + Sync + 'static,
    ) -> Self {
        self.field_hooks.push(Box::new(hook));
        self
    }

    /// Register a node hook for one kind
    #[must_use]
    pub fn on_kind(
        mut self,
        tag: KindTag,
        hook: impl Fn(&mut SchemaNode, &FieldDescriptor) + Send + Sync + 'static,
    ) -> Self {
        self.node_hooks.push((tag, Box::new(hook)));
        self
    }

    /// Check if no hooks are registered
    pub fn is_empty(&self) -> bool {
        self.field_hooks.is_empty() && self.node_hooks.is_empty()
    }

    fn run_node_hooks(&self, tag: KindTag, node: &mut SchemaNode, field: &FieldDescriptor) {
        for (_, hook) in self.node_hooks.iter().filter(|(t, _)| *t == tag) {
            hook(node, field);
        }
    }
}

impl fmt::Debug for VisitorPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisitorPipeline")
            .field("field_hooks", &self.field_hooks.len())
            .field(
                "node_hooks",
                &self.node_hooks.iter().map(|(t, _)| t).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl PropertyVisitor for VisitorPipeline {
    fn visit_field(&self, field: &FieldDescriptor) -> Option<SchemaNode> {
        self.field_hooks.iter().find_map(|hook| hook(field))
    }

    fn visit_string(&self, node: &mut SchemaNode, field: &FieldDescriptor) {
        self.run_node_hooks(KindTag::String, node, field);
    }

    fn visit_number(&self, node: &mut SchemaNode, field: &FieldDescriptor) {
        self.run_node_hooks(KindTag::Number, node, field);
    }

    fn visit_boolean(&self, node: &mut SchemaNode, field: &FieldDescriptor) {
        self.run_node_hooks(KindTag::Boolean, node, field);
    }

    fn visit_date(&self, node: &mut SchemaNode, field: &FieldDescriptor) {
        self.run_node_hooks(KindTag::Date, node, field);
    }

    fn visit_object(&self, node: &mut SchemaNode, field: &FieldDescriptor) {
        self.run_node_hooks(KindTag::Object, node, field);
    }

    fn visit_nested(&self, node: &mut SchemaNode, field: &FieldDescriptor) {
        self.run_node_hooks(KindTag::Nested, node, field);
    }

    fn visit_custom(&self, node: &mut SchemaNode, field: &FieldDescriptor) {
        self.run_node_hooks(KindTag::Custom, node, field);
    }
}
