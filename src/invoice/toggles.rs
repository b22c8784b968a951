//! Toggle-mode compiler

use super::definitions::compiled_definitions;
use super::types::{FieldDescriptor, InvoiceToggles};

/// Compiles toggle switches into field descriptors.
///
/// One descriptor per enabled switch, in field-table order, each with
/// `required = all_required`. Never fails; no switches on yields no fields.
pub fn compile_toggles(toggles: &InvoiceToggles, all_required: bool) -> Vec<FieldDescriptor> {
    compiled_definitions()
        .filter(|(def, _)| toggles.is_enabled(def.key))
        .map(|(def, pattern)| {
            FieldDescriptor::string(def.key.as_str(), def.label, all_required, Some(pattern.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn toggles(tax_id: bool, mobile_carrier: bool, citizen_cert: bool) -> InvoiceToggles {
        InvoiceToggles {
            tax_id,
            mobile_carrier,
            citizen_cert,
        }
    }

    #[test]
    fn test_no_switches_no_fields() {
        assert!(compile_toggles(&InvoiceToggles::default(), false).is_empty());
        assert!(compile_toggles(&InvoiceToggles::default(), true).is_empty());
    }

    #[test]
    fn test_count_matches_enabled_switches() {
        for bits in 0..8u8 {
            let t = toggles(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            assert_eq!(compile_toggles(&t, false).len(), t.enabled_count());
        }
    }

    #[test]
    fn test_order_follows_table_not_input() {
        let t: InvoiceToggles = serde_json::from_value(json!({
            "citizenCert": true,
            "taxId": true
        }))
        .unwrap();

        let keys: Vec<_> = compile_toggles(&t, false)
            .into_iter()
            .map(|f| f.key)
            .collect();
        assert_eq!(keys, vec!["taxId", "citizenCert"]);
    }

    #[test]
    fn test_all_required_flag() {
        let fields = compile_toggles(&toggles(true, true, false), true);
        assert!(fields.iter().all(|f| f.required));

        let fields = compile_toggles(&toggles(true, true, false), false);
        assert!(fields.iter().all(|f| !f.required));
    }

    #[test]
    fn test_descriptor_carries_table_pattern() {
        let fields = compile_toggles(&toggles(true, false, false), false);
        assert_eq!(fields[0].pattern.as_ref().unwrap().as_str(), "^[0-9]{8}$");
        assert_eq!(fields[0].label, "統一編號 Tax ID");
    }
}
