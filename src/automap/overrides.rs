//! Explicit overrides and the whole-field merge

use crate::error::{Error, Result};
use crate::schema::{validate_setting_key, Properties, SchemaNode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Caller-authored nodes keyed by field identifier
///
/// A key that matches a field id of the mapped type takes that field's wire
/// name; any other key is used as a literal wire name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideSpec {
    entries: BTreeMap<String, SchemaNode>,
}

impl OverrideSpec {
    /// Create an empty spec
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, node: SchemaNode) -> Self {
        self.entries.insert(key.into(), node);
        self
    }

    /// Add an entry in place
    pub fn insert(&mut self, key: impl Into<String>, node: SchemaNode) {
        self.entries.insert(key.into(), node);
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &SchemaNode)> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the spec is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a spec from YAML (field id → node)
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let spec: OverrideSpec = serde_yaml::from_str(yaml)
            .map_err(|e| Error::override_shape("<root>", e.to_string()))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Check every entry against the node shape rules
    pub fn validate(&self) -> Result<()> {
        for (key, node) in &self.entries {
            if key.is_empty() {
                return Err(Error::override_shape(key, "empty field name"));
            }
            validate_node(key, node)?;
        }
        Ok(())
    }
}

/// Shape rules for an explicit node and everything below it
fn validate_node(path: &str, node: &SchemaNode) -> Result<()> {
    if node.properties.is_some() && !node.kind.is_object_like() {
        return Err(Error::override_shape(
            path,
            format!("kind '{}' cannot have properties", node.kind),
        ));
    }

    for key in node.settings.keys() {
        validate_setting_key(key).map_err(|message| Error::override_shape(path, message))?;
    }

    let children = node.properties.iter().flatten().chain(&node.fields);
    for (name, child) in children {
        if name.is_empty() {
            return Err(Error::override_shape(path, "empty child name"));
        }
        validate_node(&format!("{path}.{name}"), child)?;
    }

    Ok(())
}

/// Merge explicit nodes into an inferred child mapping
///
/// Every override replaces the inferred node of the same name wholesale;
/// settings and children of the replaced node are not carried over.
pub fn merge(mut inferred: Properties, overrides: Properties) -> Properties {
    for (name, node) in overrides {
        inferred.insert(name, node);
    }
    inferred
}
