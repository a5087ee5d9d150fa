//! Loader types
//!
//! Declarative type definitions for YAML parsing.

use crate::descriptor::FieldConfig;
use serde::{Deserialize, Serialize};

// ============================================================================
// Definition File
// ============================================================================

/// Top-level type definition file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TypeDefinitionFile {
    /// Declared types
    #[serde(default)]
    pub types: Vec<TypeDefinition>,
}

/// One declared type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TypeDefinition {
    /// Type identity
    pub name: String,
    /// Type-level wire name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping_name: Option<String>,
    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

// ============================================================================
// Field Definition
// ============================================================================

/// One declared field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FieldDefinition {
    /// Field identifier
    pub name: String,
    /// Value kind in textual syntax (`string`, `list<Employee>`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Declared ignore flag
    #[serde(default)]
    pub ignore: bool,
    /// Declarative mapping configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<FieldConfig>,
}
