//! Structured JSON logger
//!
//! - One log line = one event
//! - `event` then `severity` first, remaining fields sorted by key
//! - Synchronous, written to stderr so stdout stays free for CLI responses

use serde_json::Value;
use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 1,
    /// Degraded but continuing (e.g. fail-open)
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stderr());
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let mut line = format_line(severity, event, fields);
        line.push('\n');

        // Logging never fails the caller
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

/// Renders one log line without the trailing newline.
fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut sorted: Vec<_> = fields.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);

    // preserve_order keeps insertion order in the map
    let mut object = serde_json::Map::with_capacity(fields.len() + 2);
    object.insert("event".into(), Value::from(event));
    object.insert("severity".into(), Value::from(severity.as_str()));
    for (key, value) in sorted {
        if key == &"event" || key == &"severity" {
            continue;
        }
        object.insert((*key).to_string(), Value::from(*value));
    }

    Value::Object(object).to_string()
}

#[cfg(test)]
pub fn capture_log(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::log_to_writer(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_log_json_format() {
        let output = capture_log(Severity::Warn, "INVOICE_SCHEMA_FAIL_OPEN", &[]);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "INVOICE_SCHEMA_FAIL_OPEN");
        assert_eq!(parsed["severity"], "WARN");
    }

    #[test]
    fn test_log_deterministic_ordering() {
        let a = capture_log(Severity::Info, "TEST", &[("path", "taxId"), ("code", "x")]);
        let b = capture_log(Severity::Info, "TEST", &[("code", "x"), ("path", "taxId")]);
        assert_eq!(a, b);
        assert!(a.find("\"code\"").unwrap() < a.find("\"path\"").unwrap());
        assert!(a.starts_with("{\"event\":\"TEST\",\"severity\":\"INFO\""));
    }

    #[test]
    fn test_log_escapes_special_chars() {
        let output = capture_log(Severity::Info, "TEST", &[("label", "統一編號 \"Tax\"\nID")]);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["label"], "統一編號 \"Tax\"\nID");
    }

    #[test]
    fn test_reserved_keys_not_overwritten() {
        let output = capture_log(Severity::Info, "REAL", &[("event", "FAKE")]);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "REAL");
    }

    #[test]
    fn test_log_one_line() {
        let output = capture_log(Severity::Info, "TEST", &[("a", "1"), ("b", "2")]);
        assert_eq!(output.matches('\n').count(), 1);
        assert!(output.ends_with('\n'));
    }
}
