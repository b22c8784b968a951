//! Invoice Invariant Tests
//!
//! - Toggle compilation emits exactly the enabled known fields
//! - Only the string-properties object subset of JSON Schema is accepted
//! - Compiled schemas enforce their `required` list and nothing more
//! - Input validation reports every field error, in field order
//! - Missing payloads and unknown modes compile to no fields

use invoice_fields::invoice::{
    compile_invoice_config, compile_invoice_value, compile_json_schema, compile_toggles,
    validate_invoice_input, validate_json_schema, FieldDescriptor, FieldPattern, InputErrorCode,
    InvoiceConfig, InvoiceInput, InvoiceToggles, SchemaViolationCode, FIELD_DEFINITIONS,
};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn all_toggle_sets() -> Vec<InvoiceToggles> {
    (0..8u8)
        .map(|bits| InvoiceToggles {
            tax_id: bits & 1 != 0,
            mobile_carrier: bits & 2 != 0,
            citizen_cert: bits & 4 != 0,
        })
        .collect()
}

fn tax_id_descriptor() -> FieldDescriptor {
    FieldDescriptor::string(
        "taxId",
        "Tax ID",
        true,
        Some(FieldPattern::new("^[0-9]{8}$").unwrap()),
    )
}

// =============================================================================
// Toggle Compiler
// =============================================================================

#[test]
fn test_no_enabled_toggles_yield_no_fields() {
    assert!(compile_toggles(&InvoiceToggles::default(), false).is_empty());
}

#[test]
fn test_field_count_equals_enabled_known_toggles() {
    for toggles in all_toggle_sets() {
        let fields = compile_toggles(&toggles, false);
        assert_eq!(fields.len(), toggles.enabled_count());
    }
}

#[test]
fn test_injected_unknown_toggle_is_excluded() {
    let config = InvoiceConfig::from_value(&json!({
        "mode": "toggles",
        "toggles": { "taxId": true, "donationCode": true, "npoban": true }
    }))
    .unwrap();

    let fields = compile_invoice_config(&config);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].key, "taxId");
}

#[test]
fn test_toggle_fields_follow_table_order() {
    let all_on = InvoiceToggles {
        tax_id: true,
        mobile_carrier: true,
        citizen_cert: true,
    };
    let keys: Vec<_> = compile_toggles(&all_on, false)
        .into_iter()
        .map(|f| f.key)
        .collect();
    let table: Vec<_> = FIELD_DEFINITIONS.iter().map(|d| d.key.as_str()).collect();
    assert_eq!(keys, table);
}

// =============================================================================
// JSON Schema Validation
// =============================================================================

#[test]
fn test_string_object_schema_is_valid() {
    let schema = json!({ "type": "object", "properties": { "a": { "type": "string" } } });
    assert!(validate_json_schema(&schema).is_ok());
}

#[test]
fn test_array_schema_is_invalid_type() {
    let err = validate_json_schema(&json!({ "type": "array", "properties": {} })).unwrap_err();
    assert_eq!(err.code(), SchemaViolationCode::InvalidType);
}

#[test]
fn test_schema_without_properties() {
    let err = validate_json_schema(&json!({ "type": "object" })).unwrap_err();
    assert_eq!(err.code(), SchemaViolationCode::MissingProperties);
}

#[test]
fn test_number_property_is_unsupported() {
    let err = validate_json_schema(&json!({
        "type": "object",
        "properties": { "n": { "type": "number" } }
    }))
    .unwrap_err();
    assert_eq!(err.code(), SchemaViolationCode::UnsupportedType);
    assert_eq!(err.path(), Some("n"));
}

#[test]
fn test_schema_validation_is_deterministic() {
    let schema = json!({
        "type": "object",
        "properties": {
            "a": { "type": "string" },
            "b": { "type": "boolean" },
            "c": { "type": "array" }
        }
    });

    for _ in 0..100 {
        let err = validate_json_schema(&schema).unwrap_err();
        assert_eq!(err.path(), Some("b"));
    }
}

// =============================================================================
// Compile-then-validate Round Trip
// =============================================================================

#[test]
fn test_compiled_schema_enforces_required_list_only() {
    let schema = json!({
        "type": "object",
        "properties": {
            "buyerName": { "type": "string", "title": "買受人" },
            "taxId": { "type": "string", "pattern": "^[0-9]{8}$" },
            "memo": { "type": "string" }
        },
        "required": ["buyerName", "taxId"]
    });
    let fields = compile_json_schema(&schema).unwrap();

    // Empty values for required keys are rejected
    let input = InvoiceInput::new()
        .with("buyerName", "")
        .with("taxId", "  ");
    let errors = validate_invoice_input(&fields, &input);
    let keys: Vec<_> = errors.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["buyerName", "taxId"]);
    assert!(errors.iter().all(|e| e.code == InputErrorCode::Required));

    // Omitting the optional key is accepted
    let input = InvoiceInput::new()
        .with("buyerName", "王小明")
        .with("taxId", "12345678");
    assert!(validate_invoice_input(&fields, &input).is_empty());
}

// =============================================================================
// Input Validation
// =============================================================================

#[test]
fn test_missing_required_value() {
    let errors = validate_invoice_input(&[tax_id_descriptor()], &InvoiceInput::new());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].key, "taxId");
    assert_eq!(errors[0].code, InputErrorCode::Required);
}

#[test]
fn test_short_value_is_pattern_mismatch() {
    let input = InvoiceInput::new().with("taxId", "1234");
    let errors = validate_invoice_input(&[tax_id_descriptor()], &input);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, InputErrorCode::PatternMismatch);
}

#[test]
fn test_matching_value_passes() {
    let input = InvoiceInput::new().with("taxId", "12345678");
    assert!(validate_invoice_input(&[tax_id_descriptor()], &input).is_empty());
}

#[test]
fn test_descriptors_reusable_across_submissions() {
    let fields = vec![tax_id_descriptor()];
    let submissions = ["", "1234", "12345678", "abcdefgh", "87654321"];
    let failures: Vec<_> = submissions
        .iter()
        .map(|v| validate_invoice_input(&fields, &InvoiceInput::new().with("taxId", *v)).len())
        .collect();
    assert_eq!(failures, vec![1, 1, 0, 1, 0]);
}

#[test]
fn test_padded_value_is_pattern_mismatch() {
    let input = InvoiceInput::new().with("taxId", " 12345678 ");
    let errors = validate_invoice_input(&[tax_id_descriptor()], &input);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, InputErrorCode::PatternMismatch);
}

#[test]
fn test_schema_digit_shorthand_rejects_fullwidth_digits() {
    let fields = compile_json_schema(&json!({
        "type": "object",
        "properties": { "taxId": { "type": "string", "pattern": "^\\d{8}$" } }
    }))
    .unwrap();
    assert_eq!(fields.len(), 1);

    let ascii = InvoiceInput::new().with("taxId", "12345678");
    assert!(validate_invoice_input(&fields, &ascii).is_empty());

    let fullwidth = InvoiceInput::new().with("taxId", "１２３４５６７８");
    let errors = validate_invoice_input(&fields, &fullwidth);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, InputErrorCode::PatternMismatch);
}

// =============================================================================
// Unified Compiler
// =============================================================================

#[test]
fn test_toggles_mode_without_payload() {
    assert!(compile_invoice_value(&json!({ "mode": "toggles" })).is_empty());
}

#[test]
fn test_json_schema_mode_without_payload() {
    assert!(compile_invoice_value(&json!({ "mode": "jsonSchema" })).is_empty());
}

#[test]
fn test_unknown_mode_without_fields() {
    assert!(compile_invoice_value(&json!({ "mode": "donation" })).is_empty());
}

#[test]
fn test_corrupt_schema_fails_open() {
    let config = InvoiceConfig::json_schema(json!({
        "type": "object",
        "properties": { "n": { "type": "number" } },
        "required": ["n"]
    }));
    assert!(compile_invoice_config(&config).is_empty());
}

#[test]
fn test_serialized_fields_for_renderer() {
    let config = InvoiceConfig::toggles(InvoiceToggles {
        tax_id: false,
        mobile_carrier: true,
        citizen_cert: false,
    });
    let value = serde_json::to_value(compile_invoice_config(&config)).unwrap();
    assert_eq!(value[0]["key"], "mobileCarrier");
    assert_eq!(value[0]["type"], "string");
    assert_eq!(value[0]["required"], false);
    assert!(value[0]["pattern"].is_string());
}
