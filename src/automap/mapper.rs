//! AutoMap orchestrator

use super::guard::RecursionGuard;
use super::overrides::{merge, OverrideSpec};
use crate::config::MappingSettings;
use crate::descriptor::{FieldDescriptor, TypeDescriptor, TypeReader};
use crate::error::{Error, Result};
use crate::schema::{infer_field, validate_setting_key, Properties, SchemaNode};
use crate::types::TypeName;
use crate::visitor::{apply_node_hooks, NoopVisitor, PropertyVisitor};
use std::collections::btree_map::Entry;
use std::sync::Arc;

/// Builds schema trees from type descriptions
///
/// The mapper itself holds no per-call state and can be shared between
/// threads; every [`automap`](Self::automap) call owns its recursion guard.
pub struct AutoMapper<'r> {
    reader: &'r dyn TypeReader,
    settings: MappingSettings,
    visitor: Arc<dyn PropertyVisitor>,
    max_repeat: usize,
}

impl<'r> AutoMapper<'r> {
    /// Create a mapper with default settings and no visitor
    pub fn new(reader: &'r dyn TypeReader) -> Self {
        let settings = MappingSettings::default();
        Self {
            reader,
            max_repeat: settings.max_repeat,
            settings,
            visitor: Arc::new(NoopVisitor),
        }
    }

    /// Use the given settings (including their default repeat count)
    #[must_use]
    pub fn with_settings(mut self, settings: MappingSettings) -> Self {
        self.max_repeat = settings.max_repeat;
        self.settings = settings;
        self
    }

    /// Set the maximum repeat count for recursive types
    #[must_use]
    pub fn with_max_repeat(mut self, max_repeat: usize) -> Self {
        self.max_repeat = max_repeat;
        self
    }

    /// Use the given visitor
    #[must_use]
    pub fn with_visitor(self, visitor: impl PropertyVisitor + 'static) -> Self {
        self.with_shared_visitor(Arc::new(visitor))
    }

    /// Use a visitor shared with other mappers
    #[must_use]
    pub fn with_shared_visitor(mut self, visitor: Arc<dyn PropertyVisitor>) -> Self {
        self.visitor = visitor;
        self
    }

    /// Active settings
    pub fn settings(&self) -> &MappingSettings {
        &self.settings
    }

    /// Active maximum repeat count
    pub fn max_repeat(&self) -> usize {
        self.max_repeat
    }

    /// Map a type to an object node
    pub fn automap(&self, type_name: impl Into<TypeName>) -> Result<SchemaNode> {
        self.automap_with(type_name, None)
    }

    /// Map a type and merge explicit overrides into its top level
    ///
    /// Overrides are merged after every inferred field is resolved and
    /// replace inferred nodes wholesale. An override for an ignored field is
    /// still inserted.
    pub fn automap_with(
        &self,
        type_name: impl Into<TypeName>,
        overrides: Option<&OverrideSpec>,
    ) -> Result<SchemaNode> {
        let type_name = type_name.into();
        if self.max_repeat == 0 {
            return Err(Error::RecursionConfig {
                max_repeat: self.max_repeat,
            });
        }
        if let Some(spec) = overrides {
            spec.validate()?;
        }

        let descriptor = self.reader.describe(&type_name)?;
        let mut walk = Walk {
            mapper: self,
            guard: RecursionGuard::new(self.max_repeat),
        };
        let mut properties = walk.map_fields(&descriptor)?;

        if let Some(spec) = overrides.filter(|s| !s.is_empty()) {
            tracing::debug!(
                "Merging {} override(s) into type '{}'",
                spec.len(),
                type_name
            );
            let resolved = self.resolve_overrides(&descriptor, spec)?;
            properties = merge(properties, resolved);
        }

        Ok(SchemaNode::object(properties))
    }

    /// Type-level wire name
    ///
    /// Settings take precedence over the descriptor; without either the
    /// lowercase type name is used.
    pub fn mapping_name(&self, type_name: &TypeName) -> Result<String> {
        if let Some(name) = self
            .settings
            .for_type(type_name)
            .and_then(|t| t.mapping_name.clone())
        {
            return Ok(name);
        }
        let descriptor = self.reader.describe(type_name)?;
        Ok(descriptor
            .mapping_name
            .unwrap_or_else(|| type_name.as_str().to_lowercase()))
    }

    /// Wire name of a field: settings rename, declared name, then convention
    pub fn wire_name(&self, type_name: &TypeName, field: &FieldDescriptor) -> String {
        if let Some(name) = self.settings.renamed(type_name, &field.id) {
            return name.to_string();
        }
        if let Some(name) = field.config.as_ref().and_then(|c| c.name.as_ref()) {
            return name.clone();
        }
        self.settings.naming.name(&field.id)
    }

    fn resolve_overrides(
        &self,
        descriptor: &TypeDescriptor,
        spec: &OverrideSpec,
    ) -> Result<Properties> {
        let mut resolved = Properties::new();
        for (key, node) in spec.iter() {
            let wire_name = descriptor
                .get_field(key)
                .map_or_else(|| key.clone(), |f| self.wire_name(&descriptor.name, f));

            match resolved.entry(wire_name) {
                Entry::Occupied(e) => {
                    return Err(Error::name_collision(descriptor.name.as_str(), e.key()));
                }
                Entry::Vacant(e) => {
                    e.insert(node.clone());
                }
            }
        }
        Ok(resolved)
    }
}

/// State of one top-level mapping call
struct Walk<'m, 'r> {
    mapper: &'m AutoMapper<'r>,
    guard: RecursionGuard,
}

impl Walk<'_, '_> {
    fn map_type(&mut self, type_name: &TypeName) -> Result<Properties> {
        let descriptor = self.mapper.reader.describe(type_name)?;
        self.map_fields(&descriptor)
    }

    fn map_fields(&mut self, descriptor: &TypeDescriptor) -> Result<Properties> {
        tracing::debug!(
            "Mapping type '{}' ({} fields)",
            descriptor.name,
            descriptor.fields.len()
        );

        let mut properties = Properties::new();
        for field in &descriptor.fields {
            let ignored = field.is_ignored()
                || self.mapper.settings.is_ignored(&descriptor.name, &field.id);
            if ignored {
                tracing::debug!("Ignoring field '{}.{}'", descriptor.name, field.id);
                continue;
            }

            let node = self.map_field(field)?;
            let wire_name = self.mapper.wire_name(&descriptor.name, field);

            match properties.entry(wire_name) {
                Entry::Occupied(e) => {
                    return Err(Error::name_collision(descriptor.name.as_str(), e.key()));
                }
                Entry::Vacant(e) => {
                    e.insert(node);
                }
            }
        }

        Ok(properties)
    }

    fn map_field(&mut self, field: &FieldDescriptor) -> Result<SchemaNode> {
        tracing::trace!("Mapping field '{}' of kind {}", field.id, field.kind);
        let mapper = self.mapper;
        let visitor = mapper.visitor.as_ref();

        let mut node = match visitor.visit_field(field) {
            Some(replacement) => replacement,
            None => {
                let mut node = infer_field(field)?;
                if node.kind.is_object_like() {
                    if let Some(nested) = field.nested_type() {
                        node.properties = Some(self.map_nested(nested)?);
                    }
                }
                node
            }
        };

        apply_node_hooks(visitor, &mut node, field);
        for key in node.settings.keys() {
            validate_setting_key(key).map_err(|message| {
                Error::declarative(
                    &field.id,
                    format!("visitor hook produced an invalid setting: {message}"),
                )
            })?;
        }
        Ok(node)
    }

    fn map_nested(&mut self, nested: &TypeName) -> Result<Properties> {
        if !self.guard.enter(nested) {
            tracing::debug!(
                "Type '{}' reached the repeat limit of {}, leaving it opaque",
                nested,
                self.guard.max_repeat()
            );
            return Ok(Properties::new());
        }

        let result = self.map_type(nested);
        self.guard.exit(nested);
        result
    }
}
