//! Static invoice field table
//!
//! The three carrier/identity fields recognised by Taiwanese e-invoices.
//! Declaration order here is the order fields appear on the checkout form.

use once_cell::sync::Lazy;
use std::fmt;

use super::types::FieldPattern;

/// Known invoice field keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// Company tax ID (統一編號)
    TaxId,
    /// Mobile barcode carrier (手機條碼)
    MobileCarrier,
    /// Citizen digital certificate carrier (自然人憑證)
    CitizenCert,
}

impl FieldKey {
    /// Returns the key as used in configuration and form input
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::TaxId => "taxId",
            FieldKey::MobileCarrier => "mobileCarrier",
            FieldKey::CitizenCert => "citizenCert",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the field table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    pub key: FieldKey,
    pub label: &'static str,
    pub pattern: &'static str,
}

pub static FIELD_DEFINITIONS: [FieldDefinition; 3] = [
    FieldDefinition {
        key: FieldKey::TaxId,
        label: "統一編號 Tax ID",
        pattern: r"^[0-9]{8}$",
    },
    FieldDefinition {
        key: FieldKey::MobileCarrier,
        label: "手機條碼載具 Mobile Carrier",
        pattern: r"^/[0-9A-Z.+\-]{7}$",
    },
    FieldDefinition {
        key: FieldKey::CitizenCert,
        label: "自然人憑證載具 Citizen Certificate",
        pattern: r"^[A-Z]{2}[0-9]{14}$",
    },
];

/// Table patterns, compiled once and indexed like `FIELD_DEFINITIONS`.
static COMPILED_PATTERNS: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    FIELD_DEFINITIONS
        .iter()
        .map(|def| FieldPattern::new(def.pattern).expect("field table patterns are valid regexes"))
        .collect()
});

/// Iterates the table alongside each entry's compiled pattern.
pub(crate) fn compiled_definitions(
) -> impl Iterator<Item = (&'static FieldDefinition, &'static FieldPattern)> {
    FIELD_DEFINITIONS.iter().zip(COMPILED_PATTERNS.iter())
}
