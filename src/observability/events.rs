//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Settings
    /// Shop settings file loaded
    SettingsLoaded,
    /// Shop settings file rejected
    SettingsRejected,

    // Compilation
    /// Invoice fields compiled for a checkout
    FieldsCompiled,
    /// Stored JSON schema was invalid; checkout continues with no fields
    SchemaFailOpen,
    /// Stored configuration has no recognised mode
    UnknownInvoiceMode,
    /// Stored configuration names a mode but its payload has the wrong shape
    InvalidInvoicePayload,

    // Input validation
    /// Submitted invoice input passed validation
    InputAccepted,
    /// Submitted invoice input has field errors
    InputRejected,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SettingsLoaded => "SETTINGS_LOADED",
            Event::SettingsRejected => "SETTINGS_REJECTED",
            Event::FieldsCompiled => "INVOICE_FIELDS_COMPILED",
            Event::SchemaFailOpen => "INVOICE_SCHEMA_FAIL_OPEN",
            Event::UnknownInvoiceMode => "INVOICE_UNKNOWN_MODE",
            Event::InvalidInvoicePayload => "INVOICE_INVALID_PAYLOAD",
            Event::InputAccepted => "INVOICE_INPUT_ACCEPTED",
            Event::InputRejected => "INVOICE_INPUT_REJECTED",
        }
    }

    /// Severity an event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::SchemaFailOpen | Event::UnknownInvoiceMode | Event::InvalidInvoicePayload => {
                Severity::Warn
            }
            Event::SettingsRejected => Severity::Error,
            Event::SettingsLoaded
            | Event::FieldsCompiled
            | Event::InputAccepted
            | Event::InputRejected => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
