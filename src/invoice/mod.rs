//! Invoice field-schema subsystem
//!
//! Turns the shop's stored invoice configuration into the list of fields a
//! checkout form must render, and validates submitted values against it.
//!
//! # Pipeline
//!
//! - Toggle mode: on/off switches over the fixed field table
//! - JSON-Schema mode: admin-authored, string-properties-only object schema
//! - Both compile to the same `FieldDescriptor` list
//! - Input validation reports every field error at once
//!
//! # Two error taxonomies
//!
//! `SchemaValidationError` means the configuration is malformed and is
//! surfaced at save time. `ValidationError` means the buyer's input is
//! malformed and is always returned in full. Neither is raised as a
//! failure of the call itself.

mod compiler;
mod definitions;
mod errors;
mod json_schema;
mod toggles;
mod types;
mod validator;

pub use compiler::{compile_invoice_config, compile_invoice_value, validate_invoice_config};
pub use definitions::{FieldDefinition, FieldKey, FIELD_DEFINITIONS};
pub use errors::{
    ConfigReadError, InputErrorCode, SchemaValidationError, SchemaViolationCode, ValidationError,
};
pub use json_schema::{compile_json_schema, validate_json_schema};
pub use toggles::compile_toggles;
pub use types::{FieldDescriptor, FieldPattern, FieldType, InvoiceConfig, InvoiceInput, InvoiceToggles};
pub use validator::validate_invoice_input;
