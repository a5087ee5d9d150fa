//! Field naming conventions
//!
//! Turns a field identifier into the name it carries on the wire. The
//! convention is a pure function so it can be shared by concurrent calls.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Word boundary between a lowercase letter or digit and an uppercase letter
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Acronym followed by a capitalized word (e.g. `HTTPServer`)
static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());

/// Custom naming function
pub type NameFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Naming convention applied to field identifiers
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingConvention {
    /// Lowercase the first character (`FirstName` → `firstName`)
    #[default]
    CamelCase,
    /// Lowercase words joined by underscores (`FirstName` → `first_name`)
    SnakeCase,
    /// Use the identifier as-is
    Verbatim,
    /// Caller-supplied function
    #[serde(skip)]
    Custom(NameFn),
}

impl NamingConvention {
    /// Create a custom convention from a function
    pub fn custom(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        NamingConvention::Custom(Arc::new(f))
    }

    /// Apply the convention to a field identifier
    pub fn name(&self, field: &str) -> String {
        match self {
            NamingConvention::CamelCase => camel_case(field),
            NamingConvention::SnakeCase => snake_case(field),
            NamingConvention::Verbatim => field.to_string(),
            NamingConvention::Custom(f) => f(field),
        }
    }
}

impl fmt::Debug for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingConvention::CamelCase => write!(f, "CamelCase"),
            NamingConvention::SnakeCase => write!(f, "SnakeCase"),
            NamingConvention::Verbatim => write!(f, "Verbatim"),
            NamingConvention::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

fn camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn snake_case(s: &str) -> String {
    let s = ACRONYM_BOUNDARY.replace_all(s, "${1}_${2}");
    let s = WORD_BOUNDARY.replace_all(&s, "${1}_${2}");
    s.replace('-', "_").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        let naming = NamingConvention::CamelCase;
        assert_eq!(naming.name("FirstName"), "firstName");
        assert_eq!(naming.name("IsManager"), "isManager");
        assert_eq!(naming.name("name"), "name");
        assert_eq!(naming.name(""), "");
    }

    #[test]
    fn test_snake_case() {
        let naming = NamingConvention::SnakeCase;
        assert_eq!(naming.name("FirstName"), "first_name");
        assert_eq!(naming.name("IsManager"), "is_manager");
        assert_eq!(naming.name("HTTPServer"), "http_server");
        assert_eq!(naming.name("Address2Line"), "address2_line");
        assert_eq!(naming.name("already_snake"), "already_snake");
    }

    #[test]
    fn test_verbatim_and_custom() {
        assert_eq!(NamingConvention::Verbatim.name("FirstName"), "FirstName");

        let upper = NamingConvention::custom(str::to_uppercase);
        assert_eq!(upper.name("FirstName"), "FIRSTNAME");
        assert_eq!(format!("{upper:?}"), "Custom(..)");
    }

    #[test]
    fn test_deserialize_convention() {
        let naming: NamingConvention = serde_yaml::from_str("snake_case").unwrap();
        assert_eq!(naming.name("LastName"), "last_name");

        let naming: NamingConvention = serde_yaml::from_str("camel_case").unwrap();
        assert_eq!(naming.name("LastName"), "lastName");
    }
}
