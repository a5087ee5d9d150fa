//! Error types for AutoMap
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for AutoMap
#[allow(missing_docs)]
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Mapping Errors
    // ============================================================================
    #[error("Unsupported value kind '{kind}' for field '{field}'")]
    UnsupportedKind { field: String, kind: String },

    #[error("Duplicate wire name '{wire_name}' in type '{type_name}'")]
    NameCollision { type_name: String, wire_name: String },

    #[error("Invalid override for field '{field}': {message}")]
    OverrideShape { field: String, message: String },

    #[error("Invalid maximum repeat count {max_repeat}: must be at least 1")]
    RecursionConfig { max_repeat: usize },

    #[error("Invalid mapping configuration on field '{field}': {message}")]
    DeclarativeConfig { field: String, message: String },

    #[error("Type '{type_name}' is not known to the type reader")]
    UnknownType { type_name: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unsupported kind error
    pub fn unsupported_kind(field: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnsupportedKind {
            field: field.into(),
            kind: kind.into(),
        }
    }

    /// Create a name collision error
    pub fn name_collision(type_name: impl Into<String>, wire_name: impl Into<String>) -> Self {
        Self::NameCollision {
            type_name: type_name.into(),
            wire_name: wire_name.into(),
        }
    }

    /// Create an override shape error
    pub fn override_shape(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::OverrideShape {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a declarative configuration error
    pub fn declarative(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DeclarativeConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an unknown type error
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
        }
    }

    /// Check if this error belongs to the mapping taxonomy
    ///
    /// These are the errors an AutoMap call surfaces when the input cannot be
    /// turned into a schema tree. None of them are retryable: the walk is
    /// deterministic, so the same input always fails the same way.
    pub fn is_mapping_error(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedKind { .. }
                | Error::NameCollision { .. }
                | Error::OverrideShape { .. }
                | Error::RecursionConfig { .. }
                | Error::DeclarativeConfig { .. }
                | Error::UnknownType { .. }
        )
    }
}

/// Result type alias for AutoMap
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::unsupported_kind("Blob", "bytes");
        assert_eq!(
            err.to_string(),
            "Unsupported value kind 'bytes' for field 'Blob'"
        );

        let err = Error::name_collision("Employee", "firstName");
        assert_eq!(
            err.to_string(),
            "Duplicate wire name 'firstName' in type 'Employee'"
        );

        let err = Error::RecursionConfig { max_repeat: 0 };
        assert_eq!(
            err.to_string(),
            "Invalid maximum repeat count 0: must be at least 1"
        );
    }

    #[test]
    fn test_is_mapping_error() {
        assert!(Error::unsupported_kind("a", "b").is_mapping_error());
        assert!(Error::name_collision("a", "b").is_mapping_error());
        assert!(Error::override_shape("a", "b").is_mapping_error());
        assert!(Error::RecursionConfig { max_repeat: 0 }.is_mapping_error());
        assert!(Error::declarative("a", "b").is_mapping_error());
        assert!(Error::unknown_type("A").is_mapping_error());

        assert!(!Error::config("test").is_mapping_error());
        assert!(!Error::Other("test".to_string()).is_mapping_error());
    }

    #[test]
    fn test_anyhow_is_transparent() {
        let err: Error = anyhow::anyhow!("reflection failed").into();
        assert_eq!(err.to_string(), "reflection failed");
        assert!(!err.is_mapping_error());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
