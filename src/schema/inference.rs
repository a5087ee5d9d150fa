//! Kind inference from declared value kinds

use super::types::{NodeKind, NumberType, SchemaNode, RESERVED_KEYS};
use crate::descriptor::{FieldDescriptor, ValueKind};
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Wire-level option and custom kind names: lowercase, digits, underscores
static WIRE_OPTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").unwrap());

/// Default node for a declared value kind
///
/// Integers map to the smallest wire integer that holds every value of the
/// declared width; `u64` has no wire integer wide enough and maps to
/// `double`. Sequences and nullables are transparent. Returns `None` for
/// kinds with no inference rule.
pub fn infer(kind: &ValueKind) -> Option<SchemaNode> {
    let node = match kind {
        ValueKind::I8 => SchemaNode::number(NumberType::Byte),
        ValueKind::U8 | ValueKind::I16 => SchemaNode::number(NumberType::Short),
        ValueKind::U16 | ValueKind::I32 => SchemaNode::number(NumberType::Integer),
        ValueKind::U32 | ValueKind::I64 => SchemaNode::number(NumberType::Long),
        ValueKind::F32 => SchemaNode::number(NumberType::Float),
        ValueKind::U64 | ValueKind::F64 | ValueKind::Decimal => {
            SchemaNode::number(NumberType::Double)
        }
        ValueKind::Bool => SchemaNode::boolean(),
        ValueKind::Date | ValueKind::DateTime | ValueKind::Time => SchemaNode::date(),
        ValueKind::Char | ValueKind::String | ValueKind::Uuid => SchemaNode::string(),
        ValueKind::Complex(_) => SchemaNode::new(NodeKind::Object),
        ValueKind::Sequence(inner) | ValueKind::Nullable(inner) => return infer(inner),
        ValueKind::Unknown(_) => return None,
    };
    Some(node)
}

/// Build a field's node from its declared kind and declarative configuration
///
/// A declared kind replaces inference entirely. Declarative settings are
/// then written over the node's settings key by key.
pub fn infer_field(field: &FieldDescriptor) -> Result<SchemaNode> {
    let declared_kind = field.config.as_ref().and_then(|c| c.kind.as_deref());

    let mut node = match declared_kind {
        Some(name) => declared_node(field, name)?,
        None => infer(&field.kind)
            .ok_or_else(|| Error::unsupported_kind(&field.id, field.kind.to_string()))?,
    };

    overlay_config(&mut node, field)?;
    Ok(node)
}

fn declared_node(field: &FieldDescriptor, name: &str) -> Result<SchemaNode> {
    if !WIRE_OPTION_REGEX.is_match(name) {
        return Err(Error::declarative(
            &field.id,
            format!("invalid kind name '{name}'"),
        ));
    }

    let kind = NodeKind::parse(name);
    if kind.is_object_like() && field.nested_type().is_none() {
        return Err(Error::declarative(
            &field.id,
            format!(
                "kind '{name}' requires a complex field, found '{}'",
                field.kind
            ),
        ));
    }

    Ok(SchemaNode::new(kind))
}

/// Write declarative settings over the node's settings
pub fn overlay_config(node: &mut SchemaNode, field: &FieldDescriptor) -> Result<()> {
    let Some(config) = &field.config else {
        return Ok(());
    };

    for (key, value) in &config.settings {
        validate_setting_key(key).map_err(|message| Error::declarative(&field.id, message))?;
        node.settings.insert(key.clone(), value.clone());
    }

    Ok(())
}

/// Check a wire-level option name
pub(crate) fn validate_setting_key(key: &str) -> std::result::Result<(), String> {
    if RESERVED_KEYS.contains(&key) {
        return Err(format!("'{key}' is reserved and cannot be used as a setting"));
    }
    if !WIRE_OPTION_REGEX.is_match(key) {
        return Err(format!("invalid setting name '{key}'"));
    }
    Ok(())
}
