//! Invoice error types
//!
//! Schema violation codes (configuration is malformed):
//! - invalid_type
//! - missing_properties
//! - invalid_property
//! - unsupported_type
//! - invalid_pattern
//!
//! Stored-config read codes (the mode or its payload cannot be read):
//! - unknown_mode
//! - invalid_payload
//!
//! Input error codes (submitted values are malformed):
//! - required
//! - pattern_mismatch

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Reasons an admin-authored JSON schema is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaViolationCode {
    /// Root `type` is not "object"
    InvalidType,
    /// Root `properties` absent or not an object
    MissingProperties,
    /// A property entry is not an object
    InvalidProperty,
    /// A property `type` is not "string"
    UnsupportedType,
    /// A property `pattern` is not a valid regular expression
    InvalidPattern,
}

impl SchemaViolationCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaViolationCode::InvalidType => "invalid_type",
            SchemaViolationCode::MissingProperties => "missing_properties",
            SchemaViolationCode::InvalidProperty => "invalid_property",
            SchemaViolationCode::UnsupportedType => "unsupported_type",
            SchemaViolationCode::InvalidPattern => "invalid_pattern",
        }
    }
}

impl fmt::Display for SchemaViolationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for SchemaViolationCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// The configuration itself is malformed.
///
/// Only the first violation found is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaValidationError {
    code: SchemaViolationCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

impl SchemaValidationError {
    pub fn invalid_type(actual: &str) -> Self {
        Self {
            code: SchemaViolationCode::InvalidType,
            message: format!("Schema type must be \"object\", got {}", actual),
            path: None,
        }
    }

    pub fn missing_properties() -> Self {
        Self {
            code: SchemaViolationCode::MissingProperties,
            message: "Schema must define \"properties\" as an object".into(),
            path: None,
        }
    }

    pub fn invalid_property(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            code: SchemaViolationCode::InvalidProperty,
            message: format!("Property '{}' must be an object", key),
            path: Some(key),
        }
    }

    pub fn unsupported_type(key: impl Into<String>, actual: &str) -> Self {
        let key = key.into();
        Self {
            code: SchemaViolationCode::UnsupportedType,
            message: format!(
                "Property '{}' has unsupported type {}; only \"string\" is allowed",
                key, actual
            ),
            path: Some(key),
        }
    }

    pub fn invalid_pattern(key: impl Into<String>, reason: impl fmt::Display) -> Self {
        let key = key.into();
        Self {
            code: SchemaViolationCode::InvalidPattern,
            message: format!("Property '{}' has an invalid pattern: {}", key, reason),
            path: Some(key),
        }
    }

    pub fn code(&self) -> SchemaViolationCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Offending property key, for property-level violations
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

impl fmt::Display for SchemaValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(ref path) = self.path {
            write!(f, " (at '{}')", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaValidationError {}

/// Stored invoice config that does not deserialize into a known mode
#[derive(Debug, Error)]
pub enum ConfigReadError {
    #[error("Unrecognised invoice mode: {}", .0.as_deref().unwrap_or("missing"))]
    UnknownMode(Option<String>),

    #[error("Invalid '{mode}' invoice payload: {source}")]
    InvalidPayload {
        mode: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigReadError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigReadError::UnknownMode(_) => "unknown_mode",
            ConfigReadError::InvalidPayload { .. } => "invalid_payload",
        }
    }

    /// The mode as received, or "missing"
    pub fn mode(&self) -> &str {
        match self {
            ConfigReadError::UnknownMode(mode) => mode.as_deref().unwrap_or("missing"),
            ConfigReadError::InvalidPayload { mode, .. } => mode,
        }
    }
}

/// Reasons a submitted field value is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputErrorCode {
    /// Required field missing or blank
    Required,
    /// Value does not match the field pattern
    PatternMismatch,
}

impl InputErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            InputErrorCode::Required => "required",
            InputErrorCode::PatternMismatch => "pattern_mismatch",
        }
    }
}

impl fmt::Display for InputErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for InputErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// One field-level problem with submitted input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub key: String,
    pub code: InputErrorCode,
    pub message: String,
}

impl ValidationError {
    pub fn required(key: impl Into<String>, label: &str) -> Self {
        Self {
            key: key.into(),
            code: InputErrorCode::Required,
            message: format!("{} is required", label),
        }
    }

    pub fn pattern_mismatch(key: impl Into<String>, label: &str) -> Self {
        Self {
            key: key.into(),
            code: InputErrorCode::PatternMismatch,
            message: format!("{} has an invalid format", label),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': {} ({})", self.key, self.message, self.code)
    }
}
