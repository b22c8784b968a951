//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::fmt;
use std::io;

use crate::settings::SettingsError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Settings file could not be loaded
    SettingsError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Invoice configuration failed the save-time check
    ConfigRejected,
}

impl CliErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::SettingsError => "INVOICE_CLI_SETTINGS_ERROR",
            Self::IoError => "INVOICE_CLI_IO_ERROR",
            Self::ConfigRejected => "INVOICE_CLI_CONFIG_REJECTED",
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn config_rejected(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigRejected, msg)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<SettingsError> for CliError {
    fn from(e: SettingsError) -> Self {
        Self::new(CliErrorCode::SettingsError, format!("{}: {}", e.code(), e))
    }
}

pub type CliResult<T> = Result<T, CliError>;
