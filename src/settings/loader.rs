//! Settings file loading
//!
//! ```json
//! {
//!   "invoice": { "mode": "toggles", "toggles": { "taxId": true } },
//!   "strict_invoice_config": false
//! }
//! ```
//!
//! With `strict_invoice_config` off, a bad invoice configuration still loads
//! and checkout fails open. With it on, loading rejects the file.
//! `read` skips that gate so tooling can inspect a file either way.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

use crate::invoice::{
    compile_invoice_value, validate_invoice_config, FieldDescriptor, InvoiceConfig,
};
use crate::observability::{log_event_with_fields, Event};

use super::errors::{SettingsError, SettingsResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopSettings {
    /// Raw stored invoice configuration (optional, default: no fields)
    #[serde(default = "default_invoice")]
    pub invoice: Value,

    /// Reject unusable invoice configuration at load time (optional, default false)
    #[serde(default)]
    pub strict_invoice_config: bool,
}

fn default_invoice() -> Value {
    json!({ "mode": "toggles", "toggles": {} })
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            invoice: default_invoice(),
            strict_invoice_config: false,
        }
    }
}

impl ShopSettings {
    /// Load settings from a file, applying the strict gate
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let result = Self::read(path).and_then(|settings| {
            settings.validate()?;
            Ok(settings)
        });

        let path_str = path.display().to_string();
        match &result {
            Ok(settings) => log_event_with_fields(
                Event::SettingsLoaded,
                &[("mode", settings.invoice_mode().unwrap_or("unknown")), ("path", path_str.as_str())],
            ),
            Err(e) => log_event_with_fields(
                Event::SettingsRejected,
                &[("code", e.code()), ("path", path_str.as_str())],
            ),
        }

        result
    }

    /// Read and parse a settings file without the strict gate
    pub fn read(path: &Path) -> SettingsResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Parse and validate settings from JSON text
    pub fn from_json(content: &str) -> SettingsResult<Self> {
        let settings: ShopSettings = serde_json::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> SettingsResult<()> {
        if self.strict_invoice_config {
            self.check_invoice_config()?;
        }
        Ok(())
    }

    /// Typed invoice configuration, if the stored mode is recognised
    pub fn invoice_config(&self) -> Option<InvoiceConfig> {
        InvoiceConfig::from_value(&self.invoice)
    }

    /// Mode tag of the stored configuration, if recognised
    pub fn invoice_mode(&self) -> Option<&'static str> {
        self.invoice_config().map(|c| c.mode())
    }

    /// Save-time check, applied regardless of `strict_invoice_config`.
    pub fn check_invoice_config(&self) -> SettingsResult<InvoiceConfig> {
        let config = InvoiceConfig::parse(&self.invoice)?;
        validate_invoice_config(&config)?;
        Ok(config)
    }

    /// Checkout-time field list; never fails
    pub fn invoice_fields(&self) -> Vec<FieldDescriptor> {
        compile_invoice_value(&self.invoice)
    }
}
