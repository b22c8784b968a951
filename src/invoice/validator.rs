//! Submitted-input validator
//!
//! Per field, in field-list order:
//! - blank and required: `required`, no pattern check
//! - blank and optional: no constraint
//! - pattern present and not matched: `pattern_mismatch`
//!
//! Blank means missing, or empty after trimming. Pattern checks run on the
//! value as submitted. Every error is collected; nothing short-circuits.

use super::errors::ValidationError;
use super::types::{FieldDescriptor, InvoiceInput};

/// Validates submitted values against compiled field descriptors.
pub fn validate_invoice_input(fields: &[FieldDescriptor], input: &InvoiceInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for field in fields {
        let value = input
            .value(&field.key)
            .filter(|v| !v.trim().is_empty());

        let value = match value {
            Some(v) => v,
            None => {
                if field.required {
                    errors.push(ValidationError::required(&field.key, &field.label));
                }
                continue;
            }
        };

        if let Some(ref pattern) = field.pattern {
            if !pattern.is_match(value) {
                errors.push(ValidationError::pattern_mismatch(&field.key, &field.label));
            }
        }
    }

    errors
}
