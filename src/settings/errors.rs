//! Settings error types

use thiserror::Error;

use crate::invoice::{ConfigReadError, SchemaValidationError};

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings file could not be read
    #[error("Failed to read settings '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid JSON or has the wrong shape
    #[error("Invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// `invoice.mode` is not recognised, or its payload has the wrong shape
    /// (strict mode only)
    #[error("Invalid invoice configuration: {0}")]
    InvalidInvoiceConfig(#[from] ConfigReadError),

    /// Invoice JSON schema fails save-time validation (strict mode only)
    #[error("Invalid invoice schema: {0}")]
    InvalidInvoiceSchema(#[from] SchemaValidationError),
}

impl SettingsError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SettingsError::Read { .. } => "INVOICE_SETTINGS_READ_FAILED",
            SettingsError::Parse(_) => "INVOICE_SETTINGS_INVALID_JSON",
            SettingsError::InvalidInvoiceConfig(ConfigReadError::UnknownMode(_)) => {
                "INVOICE_SETTINGS_UNKNOWN_MODE"
            }
            SettingsError::InvalidInvoiceConfig(ConfigReadError::InvalidPayload { .. }) => {
                "INVOICE_SETTINGS_INVALID_PAYLOAD"
            }
            SettingsError::InvalidInvoiceSchema(_) => "INVOICE_SETTINGS_INVALID_SCHEMA",
        }
    }
}
