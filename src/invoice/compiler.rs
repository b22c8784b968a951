//! Unified compiler over both configuration modes
//!
//! Checkout-time compilation fails open: a configuration that cannot be
//! interpreted yields no fields instead of blocking the order. Save-time
//! validation is where a malformed schema gets reported to the admin.

use serde_json::Value;

use crate::observability::{log_event_with_fields, Event};

use super::errors::{ConfigReadError, SchemaValidationError};
use super::json_schema::{compile_checked, validate_json_schema};
use super::toggles::compile_toggles;
use super::types::{FieldDescriptor, InvoiceConfig};

/// Compiles a stored configuration into the checkout field list.
///
/// A missing payload yields no fields. A JSON schema that fails validation
/// also yields no fields and emits an `INVOICE_SCHEMA_FAIL_OPEN` warning.
pub fn compile_invoice_config(config: &InvoiceConfig) -> Vec<FieldDescriptor> {
    match config {
        InvoiceConfig::Toggles { toggles } => toggles
            .as_ref()
            .map(|t| compile_toggles(t, false))
            .unwrap_or_default(),
        InvoiceConfig::JsonSchema { json_schema } => match json_schema {
            Some(schema) => compile_checked(schema).unwrap_or_else(|err| {
                log_event_with_fields(
                    Event::SchemaFailOpen,
                    &[
                        ("code", err.code().code()),
                        ("path", err.path().unwrap_or("")),
                    ],
                );
                Vec::new()
            }),
            None => Vec::new(),
        },
    }
}

/// Compiles raw stored configuration.
///
/// An unknown `mode` or a payload of the wrong shape yields no fields and
/// emits a warning naming the mode received.
pub fn compile_invoice_value(value: &Value) -> Vec<FieldDescriptor> {
    match InvoiceConfig::parse(value) {
        Ok(config) => compile_invoice_config(&config),
        Err(err) => {
            log_event_with_fields(
                read_failure_event(&err),
                &[("mode", err.mode()), ("code", err.code())],
            );
            Vec::new()
        }
    }
}

fn read_failure_event(err: &ConfigReadError) -> Event {
    match err {
        ConfigReadError::UnknownMode(_) => Event::UnknownInvoiceMode,
        ConfigReadError::InvalidPayload { .. } => Event::InvalidInvoicePayload,
    }
}

/// Save-time check of a configuration.
///
/// Toggle mode and missing payloads are always accepted.
pub fn validate_invoice_config(config: &InvoiceConfig) -> Result<(), SchemaValidationError> {
    match config {
        InvoiceConfig::Toggles { .. } => Ok(()),
        InvoiceConfig::JsonSchema { json_schema } => match json_schema {
            Some(schema) => validate_json_schema(schema),
            None => Ok(()),
        },
    }
}
