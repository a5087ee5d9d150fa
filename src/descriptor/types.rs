//! Descriptor types

use crate::types::{Settings, TypeName};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Value Kind
// ============================================================================

/// Declared value kind of a field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ValueKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Decimal,
    Bool,
    Char,
    String,
    Uuid,
    Date,
    DateTime,
    Time,
    /// A described type with its own fields
    Complex(TypeName),
    /// Sequence of the inner kind
    Sequence(Box<ValueKind>),
    /// Optional value of the inner kind
    Nullable(Box<ValueKind>),
    /// A kind with no inference rule
    Unknown(String),
}

impl ValueKind {
    /// Complex kind for a named type
    pub fn complex(name: impl Into<TypeName>) -> Self {
        ValueKind::Complex(name.into())
    }

    /// Sequence of the given kind
    pub fn list(inner: ValueKind) -> Self {
        ValueKind::Sequence(Box::new(inner))
    }

    /// Nullable wrapper around the given kind
    pub fn nullable(inner: ValueKind) -> Self {
        ValueKind::Nullable(Box::new(inner))
    }

    /// Strip sequence and nullable wrappers
    pub fn element(&self) -> &ValueKind {
        match self {
            ValueKind::Sequence(inner) | ValueKind::Nullable(inner) => inner.element(),
            other => other,
        }
    }

    /// Nested type for complex kinds (seen through wrappers)
    pub fn nested_type(&self) -> Option<&TypeName> {
        match self.element() {
            ValueKind::Complex(name) => Some(name),
            _ => None,
        }
    }

    /// Replace `Unknown` names that refer to known types with `Complex`
    pub(crate) fn resolve(self, is_type: &impl Fn(&str) -> bool) -> Self {
        match self {
            ValueKind::Unknown(name) if is_type(&name) => ValueKind::Complex(TypeName::new(name)),
            ValueKind::Sequence(inner) => ValueKind::Sequence(Box::new(inner.resolve(is_type))),
            ValueKind::Nullable(inner) => ValueKind::Nullable(Box::new(inner.resolve(is_type))),
            other => other,
        }
    }

    fn keyword(s: &str) -> Option<ValueKind> {
        let kind = match s {
            "i8" | "sbyte" => ValueKind::I8,
            "i16" | "short" => ValueKind::I16,
            "i32" | "int" | "integer" => ValueKind::I32,
            "i64" | "long" => ValueKind::I64,
            "u8" | "byte" => ValueKind::U8,
            "u16" | "ushort" => ValueKind::U16,
            "u32" | "uint" => ValueKind::U32,
            "u64" | "ulong" => ValueKind::U64,
            "f32" | "float" => ValueKind::F32,
            "f64" | "double" => ValueKind::F64,
            "decimal" => ValueKind::Decimal,
            "bool" | "boolean" => ValueKind::Bool,
            "char" => ValueKind::Char,
            "string" | "text" => ValueKind::String,
            "uuid" | "guid" => ValueKind::Uuid,
            "date" => ValueKind::Date,
            "datetime" => ValueKind::DateTime,
            "time" => ValueKind::Time,
            _ => return None,
        };
        Some(kind)
    }
}

/// Split `wrapper<inner>` into its parts
fn unwrap_generic<'a>(s: &'a str, wrapper: &str) -> Option<&'a str> {
    s.strip_prefix(wrapper)?
        .trim_start()
        .strip_prefix('<')?
        .strip_suffix('>')
        .map(str::trim)
}

impl FromStr for ValueKind {
    type Err = String;

    /// Parse the textual kind syntax
    ///
    /// Primitive keywords, `list<X>`, `option<X>` and `object<Name>`. Any
    /// other identifier parses as `Unknown` and is resolved against the
    /// declared types by the loader.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty value kind".to_string());
        }

        if let Some(inner) = unwrap_generic(s, "list") {
            return Ok(ValueKind::list(inner.parse()?));
        }
        if let Some(inner) = unwrap_generic(s, "option") {
            return Ok(ValueKind::nullable(inner.parse()?));
        }
        if let Some(inner) = unwrap_generic(s, "object") {
            if inner.is_empty() || inner.contains(['<', '>']) {
                return Err(format!("invalid object type in '{s}'"));
            }
            return Ok(ValueKind::complex(inner));
        }
        if s.contains(['<', '>', ' ']) {
            return Err(format!("malformed value kind '{s}'"));
        }

        Ok(ValueKind::keyword(s).unwrap_or_else(|| ValueKind::Unknown(s.to_string())))
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::I8 => write!(f, "i8"),
            ValueKind::I16 => write!(f, "i16"),
            ValueKind::I32 => write!(f, "i32"),
            ValueKind::I64 => write!(f, "i64"),
            ValueKind::U8 => write!(f, "u8"),
            ValueKind::U16 => write!(f, "u16"),
            ValueKind::U32 => write!(f, "u32"),
            ValueKind::U64 => write!(f, "u64"),
            ValueKind::F32 => write!(f, "f32"),
            ValueKind::F64 => write!(f, "f64"),
            ValueKind::Decimal => write!(f, "decimal"),
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::Char => write!(f, "char"),
            ValueKind::String => write!(f, "string"),
            ValueKind::Uuid => write!(f, "uuid"),
            ValueKind::Date => write!(f, "date"),
            ValueKind::DateTime => write!(f, "datetime"),
            ValueKind::Time => write!(f, "time"),
            ValueKind::Complex(name) => write!(f, "object<{name}>"),
            ValueKind::Sequence(inner) => write!(f, "list<{inner}>"),
            ValueKind::Nullable(inner) => write!(f, "option<{inner}>"),
            ValueKind::Unknown(name) => write!(f, "{name}"),
        }
    }
}

// ============================================================================
// Declarative Field Configuration
// ============================================================================

/// Mapping configuration attached to a field where its type is defined
///
/// Plain data: the kind and setting keys are only interpreted when the
/// field is mapped, so malformed values are reported against the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Wire kind replacing the inferred one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Wire name replacing the naming convention
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Leave the field out of the mapping
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ignore: bool,

    /// Wire-level options
    #[serde(flatten)]
    pub settings: Settings,
}

impl FieldConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the declared kind
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set the declared wire name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Mark the field as ignored
    #[must_use]
    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Add a setting
    #[must_use]
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }
}

// ============================================================================
// Field Descriptor
// ============================================================================

/// One structural field of a described type
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Stable field identifier
    pub id: String,
    /// Declared value kind
    pub kind: ValueKind,
    /// Declarative mapping configuration
    pub config: Option<FieldConfig>,
    /// Declared ignore flag
    pub ignore: bool,
}

impl FieldDescriptor {
    /// Create a field with the given kind
    pub fn new(id: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            id: id.into(),
            kind,
            config: None,
            ignore: false,
        }
    }

    /// Create a field whose kind comes from a Rust type
    pub fn of<T: super::FieldKind + ?Sized>(id: impl Into<String>) -> Self {
        Self::new(id, T::value_kind())
    }

    /// Attach declarative configuration
    #[must_use]
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Mark the field as ignored
    #[must_use]
    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Nested type reference, present iff the kind is complex
    pub fn nested_type(&self) -> Option<&TypeName> {
        self.kind.nested_type()
    }

    /// Check the declared ignore flag, on the field or in its configuration
    pub fn is_ignored(&self) -> bool {
        self.ignore || self.config.as_ref().is_some_and(|c| c.ignore)
    }
}

// ============================================================================
// Type Descriptor
// ============================================================================

/// Ordered field list for a described type
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    /// Type identity
    pub name: TypeName,
    /// Type-level wire name, if declared
    pub mapping_name: Option<String>,
    /// Fields in declared order
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Create an empty descriptor
    pub fn new(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            mapping_name: None,
            fields: Vec::new(),
        }
    }

    /// Append a field
    #[must_use]
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Set the type-level wire name
    #[must_use]
    pub fn with_mapping_name(mut self, name: impl Into<String>) -> Self {
        self.mapping_name = Some(name.into());
        self
    }

    /// Find a field by identifier
    pub fn get_field(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id == id)
    }
}
