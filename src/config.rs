//! Mapping settings
//!
//! Caller-level configuration consulted while mapping: the naming
//! convention, the default maximum repeat count, and per-type rules that
//! ignore or rename fields without touching the type definitions.

use crate::error::{Error, Result, ResultExt};
use crate::naming::NamingConvention;
use crate::types::TypeName;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

// ============================================================================
// Mapping Settings
// ============================================================================

/// Settings shared by mapping calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingSettings {
    /// Naming convention for field wire names
    #[serde(default)]
    pub naming: NamingConvention,

    /// Default maximum repeat count for recursive types
    #[serde(default = "default_max_repeat")]
    pub max_repeat: usize,

    /// Per-type rules
    #[serde(default)]
    pub types: HashMap<TypeName, TypeSettings>,
}

fn default_max_repeat() -> usize {
    1
}

impl Default for MappingSettings {
    fn default() -> Self {
        Self {
            naming: NamingConvention::default(),
            max_repeat: default_max_repeat(),
            types: HashMap::new(),
        }
    }
}

/// Rules for one type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSettings {
    /// Type-level wire name
    #[serde(default)]
    pub mapping_name: Option<String>,

    /// Field ids left out of the mapping
    #[serde(default)]
    pub ignore: BTreeSet<String>,

    /// Field id to wire name
    #[serde(default)]
    pub rename: HashMap<String, String>,
}

impl MappingSettings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let settings = serde_yaml::from_str::<MappingSettings>(yaml)
            .context("Failed to parse mapping settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Set the naming convention
    #[must_use]
    pub fn with_naming(mut self, naming: NamingConvention) -> Self {
        self.naming = naming;
        self
    }

    /// Set the default maximum repeat count
    #[must_use]
    pub fn with_max_repeat(mut self, max_repeat: usize) -> Self {
        self.max_repeat = max_repeat;
        self
    }

    /// Ignore a field of a type
    #[must_use]
    pub fn ignore(mut self, type_name: impl Into<TypeName>, field: impl Into<String>) -> Self {
        self.type_settings_mut(type_name.into())
            .ignore
            .insert(field.into());
        self
    }

    /// Rename a field of a type
    #[must_use]
    pub fn rename(
        mut self,
        type_name: impl Into<TypeName>,
        field: impl Into<String>,
        wire_name: impl Into<String>,
    ) -> Self {
        self.type_settings_mut(type_name.into())
            .rename
            .insert(field.into(), wire_name.into());
        self
    }

    /// Set the type-level wire name of a type
    #[must_use]
    pub fn mapping_name(mut self, type_name: impl Into<TypeName>, name: impl Into<String>) -> Self {
        self.type_settings_mut(type_name.into()).mapping_name = Some(name.into());
        self
    }

    /// Get the rules for a type
    pub fn for_type(&self, type_name: &TypeName) -> Option<&TypeSettings> {
        self.types.get(type_name)
    }

    /// Check the external ignore rule for a field
    pub fn is_ignored(&self, type_name: &TypeName, field: &str) -> bool {
        self.for_type(type_name)
            .is_some_and(|t| t.ignore.contains(field))
    }

    /// Caller-registered wire name for a field
    pub fn renamed(&self, type_name: &TypeName, field: &str) -> Option<&str> {
        self.for_type(type_name)
            .and_then(|t| t.rename.get(field))
            .map(String::as_str)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.max_repeat == 0 {
            return Err(Error::RecursionConfig { max_repeat: 0 });
        }

        for (type_name, rules) in &self.types {
            if let Some(field) = rules.rename.iter().find(|(_, wire)| wire.is_empty()) {
                return Err(Error::config(format!(
                    "Empty rename for field '{}' of type '{}'",
                    field.0, type_name
                )));
            }
        }

        Ok(())
    }

    fn type_settings_mut(&mut self, type_name: TypeName) -> &mut TypeSettings {
        self.types.entry(type_name).or_default()
    }
}
