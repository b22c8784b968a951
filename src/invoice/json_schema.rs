//! JSON-Schema-mode validator and compiler
//!
//! Accepted subset:
//! - root `type` is "object"
//! - root `properties` is an object
//! - every property is an object with `type` "string"
//! - optional per-property `title` and `pattern`
//! - optional root `required` array of property keys
//!
//! Anything else is rejected so the form renderer never sees a field type
//! it cannot draw. Properties are visited in declaration order and the
//! first violation ends validation.

use serde_json::{Map, Value};
use std::collections::HashSet;

use super::errors::SchemaValidationError;
use super::types::{FieldDescriptor, FieldPattern, FieldType};

/// Validates an admin-authored schema against the accepted subset.
pub fn validate_json_schema(schema: &Value) -> Result<(), SchemaValidationError> {
    compile_checked(schema).map(|_| ())
}

/// Compiles a schema into field descriptors.
///
/// Returns `None` if the schema fails `validate_json_schema`; the caller is
/// expected to have reported that error when the schema was saved.
pub fn compile_json_schema(schema: &Value) -> Option<Vec<FieldDescriptor>> {
    compile_checked(schema).ok()
}

/// Single pass that validates and builds descriptors together, so each
/// pattern is compiled exactly once.
pub(crate) fn compile_checked(schema: &Value) -> Result<Vec<FieldDescriptor>, SchemaValidationError> {
    if schema.get("type").and_then(Value::as_str) != Some("object") {
        return Err(SchemaValidationError::invalid_type(&describe(schema.get("type"))));
    }

    let properties = schema
        .get("properties")
        .and_then(Value::as_object)
        .ok_or_else(SchemaValidationError::missing_properties)?;

    let required = required_keys(schema);

    let mut fields = Vec::with_capacity(properties.len());
    for (key, property) in properties {
        let property = property
            .as_object()
            .ok_or_else(|| SchemaValidationError::invalid_property(key))?;

        if property.get("type").and_then(Value::as_str) != Some(FieldType::String.type_name()) {
            return Err(SchemaValidationError::unsupported_type(
                key,
                &describe(property.get("type")),
            ));
        }

        fields.push(compile_property(key, property, required.contains(key.as_str()))?);
    }

    Ok(fields)
}

fn compile_property(
    key: &str,
    property: &Map<String, Value>,
    required: bool,
) -> Result<FieldDescriptor, SchemaValidationError> {
    let label = property
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or(key);

    let pattern = match property.get("pattern").and_then(Value::as_str) {
        Some(source) => Some(
            FieldPattern::new(source)
                .map_err(|e| SchemaValidationError::invalid_pattern(key, e))?,
        ),
        None => None,
    };

    Ok(FieldDescriptor::string(key, label, required, pattern))
}

/// Keys listed in the root `required` array. Non-string entries are ignored.
fn required_keys(schema: &Value) -> HashSet<&str> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|keys| keys.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// Describes a `type` member for error messages.
fn describe(value: Option<&Value>) -> String {
    match value {
        None => "none".to_string(),
        Some(Value::String(s)) => format!("\"{}\"", s),
        Some(other) => json_type_name(other).to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
