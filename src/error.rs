//! Error types for HTTP source configuration
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Validation produces two kinds of diagnostics:
//! - **Field-scoped** (`Error::InvalidProperty`): names exactly one property
//!   so a UI or deployment validator can highlight the offending field.
//! - **Stage-level** (`Error::InvalidStage`): no single property to blame,
//!   e.g. an inferred schema that does not fit the output format.

use thiserror::Error;

/// Boxed lower-level error carried as the cause of a diagnostic
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for HTTP source configuration
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Validation Diagnostics
    // ============================================================================
    #[error("{message}")]
    InvalidProperty {
        property: String,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("{message}")]
    InvalidStage { message: String },

    // ============================================================================
    // Configuration Loading Errors
    // ============================================================================
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Template Errors
    // ============================================================================
    #[error("Undefined variable in template: {variable}")]
    UndefinedVariable { variable: String },
}

impl Error {
    /// Create a field-scoped error
    pub fn invalid_property(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidProperty {
            property: property.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a field-scoped error with an underlying cause
    pub fn invalid_property_caused_by(
        property: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<BoxedSource>,
    ) -> Self {
        Self::InvalidProperty {
            property: property.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a stage-level error
    pub fn stage(message: impl Into<String>) -> Self {
        Self::InvalidStage {
            message: message.into(),
        }
    }

    /// Create an undefined variable error
    pub fn undefined_var(variable: impl Into<String>) -> Self {
        Self::UndefinedVariable {
            variable: variable.into(),
        }
    }

    /// "Property 'x' must be set, since ..."
    pub fn must_be_set(property: &str, reason: &str) -> Self {
        Self::invalid_property(
            property,
            format!("Property '{property}' must be set, since {reason}"),
        )
    }

    /// "Property 'x' must not be set, since ..."
    pub fn must_not_be_set(property: &str, reason: &str) -> Self {
        Self::invalid_property(
            property,
            format!("Property '{property}' must not be set, since {reason}"),
        )
    }

    /// "Unsupported value for 'x': 'token'"
    pub fn unsupported_value(property: &str, value: &str) -> Self {
        Self::invalid_property(
            property,
            format!("Unsupported value for '{property}': '{value}'"),
        )
    }

    /// Name of the offending property, if this is a field-scoped error
    pub fn property(&self) -> Option<&str> {
        match self {
            Error::InvalidProperty { property, .. } => Some(property.as_str()),
            _ => None,
        }
    }

    /// Check if this error names a single property
    pub fn is_field_scoped(&self) -> bool {
        matches!(self, Error::InvalidProperty { .. })
    }

    /// Check if this error applies to the stage as a whole
    pub fn is_stage_level(&self) -> bool {
        matches!(self, Error::InvalidStage { .. })
    }
}

/// Result type alias for HTTP source configuration
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for scoping lower-level errors to a property
pub trait ResultExt<T> {
    /// Wrap the error into a field-scoped error, embedding its message
    fn for_property(self, property: &str, message: impl Into<String>) -> Result<T>;

    /// Same as `for_property` with a lazily built message
    fn with_property<F: FnOnce() -> String>(self, property: &str, f: F) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn for_property(self, property: &str, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let message = format!("{} {}", message.into(), e);
            Error::invalid_property_caused_by(property, message, e)
        })
    }

    fn with_property<F: FnOnce() -> String>(self, property: &str, f: F) -> Result<T> {
        self.map_err(|e| {
            let message = format!("{} {}", f(), e);
            Error::invalid_property_caused_by(property, message, e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = Error::must_be_set("startIndex", "pagination type is 'Increment an index'");
        assert_eq!(
            err.to_string(),
            "Property 'startIndex' must be set, since pagination type is 'Increment an index'"
        );

        let err = Error::unsupported_value("format", "yaml");
        assert_eq!(err.to_string(), "Unsupported value for 'format': 'yaml'");

        let err = Error::stage("Schema must be a record with a single string field.");
        assert_eq!(
            err.to_string(),
            "Schema must be a record with a single string field."
        );
    }

    #[test]
    fn test_property_scope() {
        let err = Error::must_not_be_set("resultPath", "page format is 'text'");
        assert_eq!(err.property(), Some("resultPath"));
        assert!(err.is_field_scoped());
        assert!(!err.is_stage_level());

        let err = Error::stage("bad schema");
        assert_eq!(err.property(), None);
        assert!(err.is_stage_level());

        assert_eq!(Error::undefined_var("host").property(), None);
    }

    #[test]
    fn test_for_property_embeds_cause() {
        let parsed: std::result::Result<i64, _> = "abc".parse::<i64>();
        let err = parsed
            .for_property("startIndex", "Unsupported value for 'startIndex': 'abc'.")
            .unwrap_err();

        assert_eq!(err.property(), Some("startIndex"));
        assert!(err.to_string().starts_with("Unsupported value for 'startIndex'"));
        assert!(err.to_string().contains("invalid digit"));
        assert!(err.source().is_some());
    }
}
