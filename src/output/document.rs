//! Mapping document

use crate::error::{Error, Result};
use crate::schema::{Properties, SchemaNode};
use crate::types::{JsonValue, Settings};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One type-level mapping: the root object without its `type` key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeMapping {
    /// Child mapping of the root object
    #[serde(default)]
    pub properties: Properties,

    /// Root-level settings (e.g. `dynamic`)
    #[serde(flatten)]
    pub settings: Settings,
}

impl From<SchemaNode> for TypeMapping {
    fn from(mut node: SchemaNode) -> Self {
        let settings = std::mem::take(&mut node.settings);
        Self {
            properties: node.into_properties(),
            settings,
        }
    }
}

/// Mapping results keyed by mapping name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingDocument {
    /// Type mappings in name order
    pub mappings: BTreeMap<String, TypeMapping>,
}

impl MappingDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type-level result under its mapping name
    ///
    /// Fails if the name is already taken, since two types would otherwise
    /// silently share one mapping.
    pub fn insert(&mut self, mapping_name: impl Into<String>, node: SchemaNode) -> Result<()> {
        let mapping_name = mapping_name.into();
        if self.mappings.contains_key(&mapping_name) {
            return Err(Error::config(format!(
                "Mapping name '{mapping_name}' is used by more than one type"
            )));
        }
        self.mappings.insert(mapping_name, node.into());
        Ok(())
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with_mapping(mut self, mapping_name: impl Into<String>, node: SchemaNode) -> Result<Self> {
        self.insert(mapping_name, node)?;
        Ok(self)
    }

    /// Mapping for a name
    pub fn get(&self, mapping_name: &str) -> Option<&TypeMapping> {
        self.mappings.get(mapping_name)
    }

    /// Number of mappings
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Check if the document is empty
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Convert to compact JSON string
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Convert to pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
