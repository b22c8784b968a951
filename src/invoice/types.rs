//! Invoice data model
//!
//! - `FieldDescriptor`: renderer-ready field, produced by either compiler
//! - `InvoiceConfig`: stored configuration, toggles or JSON schema
//! - `InvoiceInput`: submitted form values

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use super::definitions::FieldKey;
use super::errors::ConfigReadError;

/// Field value types. Only strings are accepted by the form renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
}

impl FieldType {
    /// Returns the type name used in schemas
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
        }
    }
}

/// A validation pattern compiled once, at descriptor construction.
///
/// The source text is kept verbatim; it is what gets serialized and compared.
/// Patterns are authored for browser forms, so `\d`, `\w` and `\b` (and
/// their negations) are ASCII-only. `\s` stays Unicode-aware.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    source: String,
    regex: Regex,
}

impl FieldPattern {
    /// Compiles a pattern. Fails if `source` is not a valid regular expression.
    pub fn new(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        let regex = RegexBuilder::new(&ascii_shorthands(&source)).build()?;
        Ok(Self { source, regex })
    }

    /// Returns the pattern text as authored
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Unanchored match; patterns anchor themselves with `^`/`$`.
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

/// Rewrites the Unicode-aware shorthand classes to their ASCII forms.
///
/// Tracks bracket-class nesting so shorthands inside a class become POSIX
/// items instead of nested classes. A `]` right after `[` or `[^` is literal.
fn ascii_shorthands(source: &str) -> String {
    let mut out = String::with_capacity(source.len() + 16);
    let mut chars = source.chars().peekable();
    let mut depth = 0usize;

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(esc) => match (ascii_class(esc), depth > 0) {
                    (Some(class), false) => {
                        out.push('[');
                        out.push_str(class);
                        out.push(']');
                    }
                    (Some(class), true) => out.push_str(class),
                    (None, false) if esc == 'b' || esc == 'B' => {
                        out.push_str("(?-u:\\");
                        out.push(esc);
                        out.push(')');
                    }
                    (None, _) => {
                        out.push('\\');
                        out.push(esc);
                    }
                },
                None => out.push('\\'),
            },
            '[' => {
                depth += 1;
                out.push(c);
                if chars.peek() == Some(&'^') {
                    out.push('^');
                    chars.next();
                }
                if chars.peek() == Some(&']') {
                    out.push(']');
                    chars.next();
                }
            }
            ']' if depth > 0 => {
                depth -= 1;
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    out
}

fn ascii_class(escape: char) -> Option<&'static str> {
    match escape {
        'd' => Some("[:digit:]"),
        'D' => Some("[:^digit:]"),
        'w' => Some("[:word:]"),
        'W' => Some("[:^word:]"),
        _ => None,
    }
}

impl PartialEq for FieldPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for FieldPattern {}

impl fmt::Display for FieldPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl Serialize for FieldPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

/// Compiled description of one invoice input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Input key; identity of the field
    pub key: String,
    /// Human-readable label
    pub label: String,
    /// Value type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether an empty value is rejected
    pub required: bool,
    /// Optional format constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<FieldPattern>,
}

impl FieldDescriptor {
    /// Create a string field
    pub fn string(
        key: impl Into<String>,
        label: impl Into<String>,
        required: bool,
        pattern: Option<FieldPattern>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            field_type: FieldType::String,
            required,
            pattern,
        }
    }
}

/// On/off switches for the fixed invoice fields.
///
/// Missing switches are off. Unknown switches are ignored when parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceToggles {
    pub tax_id: bool,
    pub mobile_carrier: bool,
    pub citizen_cert: bool,
}

impl InvoiceToggles {
    /// Returns whether the switch for `key` is on
    pub fn is_enabled(&self, key: FieldKey) -> bool {
        match key {
            FieldKey::TaxId => self.tax_id,
            FieldKey::MobileCarrier => self.mobile_carrier,
            FieldKey::CitizenCert => self.citizen_cert,
        }
    }

    /// Number of switches that are on
    pub fn enabled_count(&self) -> usize {
        [self.tax_id, self.mobile_carrier, self.citizen_cert]
            .iter()
            .filter(|on| **on)
            .count()
    }
}

/// Stored invoice configuration, tagged by `mode`.
///
/// The payload may be absent in stored data; compiling such a config
/// yields no fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum InvoiceConfig {
    #[serde(rename = "toggles")]
    Toggles {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        toggles: Option<InvoiceToggles>,
    },
    #[serde(rename = "jsonSchema")]
    JsonSchema {
        #[serde(default, rename = "jsonSchema", skip_serializing_if = "Option::is_none")]
        json_schema: Option<Value>,
    },
}

impl InvoiceConfig {
    /// Toggle mode with the given switches
    pub fn toggles(toggles: InvoiceToggles) -> Self {
        InvoiceConfig::Toggles {
            toggles: Some(toggles),
        }
    }

    /// JSON-Schema mode with the given schema
    pub fn json_schema(schema: Value) -> Self {
        InvoiceConfig::JsonSchema {
            json_schema: Some(schema),
        }
    }

    /// Parses stored configuration, keeping the reason it could not be read.
    pub fn parse(value: &Value) -> Result<Self, ConfigReadError> {
        let mode = match value.get("mode").and_then(Value::as_str) {
            Some("toggles") => "toggles",
            Some("jsonSchema") => "jsonSchema",
            other => return Err(ConfigReadError::UnknownMode(other.map(str::to_string))),
        };

        serde_json::from_value(value.clone())
            .map_err(|source| ConfigReadError::InvalidPayload { mode, source })
    }

    /// Parses stored configuration.
    ///
    /// Returns `None` when the value is not an object, `mode` is missing or
    /// unknown, or the payload has the wrong shape.
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::parse(value).ok()
    }

    /// Returns the mode tag as stored
    pub fn mode(&self) -> &'static str {
        match self {
            InvoiceConfig::Toggles { .. } => "toggles",
            InvoiceConfig::JsonSchema { .. } => "jsonSchema",
        }
    }
}

impl Default for InvoiceConfig {
    fn default() -> Self {
        InvoiceConfig::toggles(InvoiceToggles::default())
    }
}

/// Submitted invoice form values keyed by field key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceInput {
    values: HashMap<String, Option<String>>,
}

impl InvoiceInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value; `None` records the key as explicitly absent
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.values.insert(key.into(), value);
    }

    /// Builder form of `insert` for a present value
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, Some(value.into()));
        self
    }

    /// Returns the submitted value, if any
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|v| v.as_deref())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Builds input from a JSON object.
    ///
    /// String members are kept; any other member counts as missing.
    /// A non-object yields empty input.
    pub fn from_json(value: &Value) -> Self {
        let values = value
            .as_object()
            .map(|obj| {
                obj.iter()
                    .map(|(k, v)| (k.clone(), v.as_str().map(str::to_string)))
                    .collect()
            })
            .unwrap_or_default();
        Self { values }
    }
}
