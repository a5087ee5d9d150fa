//! Type descriptor readers

use super::kind::Document;
use super::types::{FieldDescriptor, TypeDescriptor};
use crate::error::{Error, Result};
use crate::types::TypeName;
use std::collections::BTreeMap;

/// Source of type descriptions
///
/// Implementations return a fresh, ordered field list on every call. They
/// must be safe to share between concurrent mapping calls.
pub trait TypeReader: Send + Sync {
    /// Look up a type descriptor
    fn describe(&self, name: &TypeName) -> Result<TypeDescriptor>;

    /// Ordered fields of a type
    fn fields(&self, name: &TypeName) -> Result<Vec<FieldDescriptor>> {
        Ok(self.describe(name)?.fields)
    }
}

/// In-memory type reader
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: BTreeMap<TypeName, TypeDescriptor>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a descriptor
    pub fn insert(&mut self, descriptor: TypeDescriptor) -> &mut Self {
        self.types.insert(descriptor.name.clone(), descriptor);
        self
    }

    /// Add a descriptor (builder form)
    #[must_use]
    pub fn with_type(mut self, descriptor: TypeDescriptor) -> Self {
        self.insert(descriptor);
        self
    }

    /// Register a Rust type that describes itself
    pub fn register<T: Document>(&mut self) -> &mut Self {
        self.insert(T::descriptor())
    }

    /// Check if a type is known
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(&TypeName::new(name))
    }

    /// Get a descriptor by name
    pub fn get(&self, name: &TypeName) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// Iterate descriptors in name order
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeReader for TypeRegistry {
    fn describe(&self, name: &TypeName) -> Result<TypeDescriptor> {
        self.types
            .get(name)
            .cloned()
            .ok_or_else(|| Error::unknown_type(name.as_str()))
    }
}
