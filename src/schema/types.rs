//! Schema types

use crate::types::{JsonValue, Settings};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wire field name to child node
pub type Properties = BTreeMap<String, SchemaNode>;

/// Setting keys that belong to the node shape itself
pub const RESERVED_KEYS: [&str; 3] = ["type", "properties", "fields"];

// ============================================================================
// Kinds
// ============================================================================

/// Numeric sub-kind
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberType {
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
}

impl NumberType {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberType::Byte => "byte",
            NumberType::Short => "short",
            NumberType::Integer => "integer",
            NumberType::Long => "long",
            NumberType::Float => "float",
            NumberType::Double => "double",
        }
    }
}

/// Kind of a schema node
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    String,
    Number(NumberType),
    Boolean,
    Date,
    Object,
    Nested,
    /// Caller-declared kind, rendered verbatim
    Custom(String),
}

impl NodeKind {
    /// Parse a wire kind name
    ///
    /// `number` without a width means `double`. Unrecognized names become
    /// custom kinds.
    pub fn parse(name: &str) -> NodeKind {
        match name {
            "string" => NodeKind::String,
            "number" | "double" => NodeKind::Number(NumberType::Double),
            "float" => NodeKind::Number(NumberType::Float),
            "long" => NodeKind::Number(NumberType::Long),
            "integer" => NodeKind::Number(NumberType::Integer),
            "short" => NodeKind::Number(NumberType::Short),
            "byte" => NodeKind::Number(NumberType::Byte),
            "boolean" => NodeKind::Boolean,
            "date" => NodeKind::Date,
            "object" => NodeKind::Object,
            "nested" => NodeKind::Nested,
            other => NodeKind::Custom(other.to_string()),
        }
    }

    /// Wire name used as the `type` discriminator
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::String => "string",
            NodeKind::Number(number) => number.as_str(),
            NodeKind::Boolean => "boolean",
            NodeKind::Date => "date",
            NodeKind::Object => "object",
            NodeKind::Nested => "nested",
            NodeKind::Custom(name) => name,
        }
    }

    /// Tag used for hook dispatch
    pub fn tag(&self) -> KindTag {
        match self {
            NodeKind::String => KindTag::String,
            NodeKind::Number(_) => KindTag::Number,
            NodeKind::Boolean => KindTag::Boolean,
            NodeKind::Date => KindTag::Date,
            NodeKind::Object => KindTag::Object,
            NodeKind::Nested => KindTag::Nested,
            NodeKind::Custom(_) => KindTag::Custom,
        }
    }

    /// Check if nodes of this kind carry a child mapping
    pub fn is_object_like(&self) -> bool {
        matches!(self, NodeKind::Object | NodeKind::Nested)
    }
}

impl From<String> for NodeKind {
    fn from(name: String) -> Self {
        NodeKind::parse(&name)
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind without its payload
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindTag {
    String,
    Number,
    Boolean,
    Date,
    Object,
    Nested,
    Custom,
}

// ============================================================================
// Schema Node
// ============================================================================

/// One node of an inferred schema tree
///
/// Serializes to the wire shape `{"type": kind, ...settings}` with a
/// `properties` object for object-like nodes and a `fields` object when
/// multi-fields are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    /// Kind discriminator
    #[serde(rename = "type")]
    pub kind: NodeKind,

    /// Child mapping (object-like kinds only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,

    /// Multi-field sub-mapping
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: Properties,

    /// Wire-level options
    #[serde(flatten)]
    pub settings: Settings,
}

impl SchemaNode {
    /// Create a node of the given kind with no settings
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            properties: None,
            fields: BTreeMap::new(),
            settings: Settings::new(),
        }
    }

    /// String node
    pub fn string() -> Self {
        Self::new(NodeKind::String)
    }

    /// Number node of the given width
    pub fn number(number: NumberType) -> Self {
        Self::new(NodeKind::Number(number))
    }

    /// Boolean node
    pub fn boolean() -> Self {
        Self::new(NodeKind::Boolean)
    }

    /// Date node
    pub fn date() -> Self {
        Self::new(NodeKind::Date)
    }

    /// Object node with the given children
    pub fn object(properties: Properties) -> Self {
        Self {
            properties: Some(properties),
            ..Self::new(NodeKind::Object)
        }
    }

    /// Nested node with the given children
    pub fn nested(properties: Properties) -> Self {
        Self {
            properties: Some(properties),
            ..Self::new(NodeKind::Nested)
        }
    }

    /// Object node with an empty child mapping
    pub fn opaque() -> Self {
        Self::object(Properties::new())
    }

    /// Replace the kind
    #[must_use]
    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set a wire-level option
    #[must_use]
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Set the child mapping
    #[must_use]
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Add a multi-field
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.fields.insert(name.into(), node);
        self
    }

    /// Set a wire-level option in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
        self.settings.insert(key.into(), value.into());
    }

    /// Get a wire-level option
    pub fn setting(&self, key: &str) -> Option<&JsonValue> {
        self.settings.get(key)
    }

    /// Get a child node
    pub fn get_property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties.as_ref()?.get(name)
    }

    /// Check if this node is an object-like node with no children
    pub fn is_opaque(&self) -> bool {
        self.kind.is_object_like() && self.properties.as_ref().is_some_and(BTreeMap::is_empty)
    }

    /// Take the child mapping, leaving none
    pub fn into_properties(self) -> Properties {
        self.properties.unwrap_or_default()
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Convert to pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
