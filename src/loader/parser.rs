//! YAML parser for type definitions
//!
//! Parses and validates type definition files and builds the registry.

use crate::descriptor::{FieldDescriptor, TypeDescriptor, TypeRegistry, ValueKind};
use crate::error::{Error, Result, ResultExt};
use crate::loader::types::{TypeDefinition, TypeDefinitionFile};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load type definitions from a YAML file
pub fn load_types(path: impl AsRef<Path>) -> Result<TypeRegistry> {
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
    load_types_from_str(&content)
}

/// Load type definitions from a YAML string
pub fn load_types_from_str(yaml: &str) -> Result<TypeRegistry> {
    let file = serde_yaml::from_str::<TypeDefinitionFile>(yaml)
        .context("Failed to parse type definitions")?;

    validate_file(&file)?;

    let declared: HashSet<&str> = file.types.iter().map(|t| t.name.as_str()).collect();
    let is_type = |name: &str| declared.contains(name);

    let mut registry = TypeRegistry::new();
    for def in &file.types {
        registry.insert(build_type(def, &is_type)?);
    }

    tracing::debug!("Loaded {} type definition(s)", registry.len());
    Ok(registry)
}

/// Validate a definition file
fn validate_file(file: &TypeDefinitionFile) -> Result<()> {
    if file.types.is_empty() {
        return Err(Error::config("Type definitions must declare at least one type"));
    }

    let mut names = HashSet::new();
    for def in &file.types {
        if def.name.trim().is_empty() {
            return Err(Error::config("Type name cannot be empty"));
        }
        if !names.insert(def.name.as_str()) {
            return Err(Error::config(format!("Duplicate type name '{}'", def.name)));
        }
        validate_type(def)?;
    }

    Ok(())
}

/// Validate a type definition
fn validate_type(def: &TypeDefinition) -> Result<()> {
    let mut ids = HashSet::new();
    for field in &def.fields {
        if field.name.trim().is_empty() {
            return Err(Error::config(format!(
                "Type '{}' has a field with an empty name",
                def.name
            )));
        }
        if !ids.insert(field.name.as_str()) {
            return Err(Error::config(format!(
                "Type '{}' declares field '{}' more than once",
                def.name, field.name
            )));
        }
    }
    Ok(())
}

/// Build a descriptor, resolving bare identifiers against declared types
fn build_type(def: &TypeDefinition, is_type: &impl Fn(&str) -> bool) -> Result<TypeDescriptor> {
    let mut descriptor = TypeDescriptor::new(def.name.as_str());
    if let Some(name) = &def.mapping_name {
        descriptor = descriptor.with_mapping_name(name.as_str());
    }

    for field in &def.fields {
        let kind: ValueKind = field.kind.parse().map_err(|e| {
            Error::config(format!(
                "Field '{}.{}' has an invalid type: {}",
                def.name, field.name, e
            ))
        })?;
        let kind = kind.resolve(is_type);

        if let Some(nested) = kind.nested_type() {
            if !is_type(nested.as_str()) {
                return Err(Error::config(format!(
                    "Field '{}.{}' references undeclared type '{}'",
                    def.name, field.name, nested
                )));
            }
        }

        let mut descriptor_field = FieldDescriptor::new(field.name.as_str(), kind);
        if let Some(config) = &field.mapping {
            descriptor_field = descriptor_field.with_config(config.clone());
        }
        if field.ignore {
            descriptor_field = descriptor_field.ignored();
        }
        descriptor = descriptor.field(descriptor_field);
    }

    Ok(descriptor)
}
