//! CLI command implementations
//!
//! `check` is the back-office save path and reports configuration errors.
//! `fields` and `validate` are the checkout path and fail open.

use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::json;

use crate::invoice::{validate_invoice_input, InvoiceInput};
use crate::observability::{log_event_with_fields, Event};
use crate::settings::{SettingsError, ShopSettings};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_request_from, write_error, write_response};

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

pub fn run_command(cmd: Command) -> CliResult<()> {
    let mut stdout = io::stdout();
    match cmd {
        Command::Check { config } => check(&config, &mut stdout),
        Command::Fields { config } => fields(&config, &mut stdout),
        Command::Validate { config } => validate(&config, &mut io::stdin().lock(), &mut stdout),
    }
}

/// Save-time check of the stored invoice configuration.
///
/// The file is read without the strict gate so a rejected configuration is
/// reported as a structured error response, whatever `strict_invoice_config`
/// says.
pub fn check<W: Write>(config_path: &Path, out: &mut W) -> CliResult<()> {
    let settings = ShopSettings::read(config_path)?;

    match settings.check_invoice_config() {
        Ok(config) => {
            let field_count = settings.invoice_fields().len();
            write_response(
                out,
                json!({
                    "mode": config.mode(),
                    "fieldCount": field_count
                }),
            )
        }
        Err(err) => {
            let path_str = config_path.display().to_string();
            log_event_with_fields(
                Event::SettingsRejected,
                &[("code", err.code()), ("path", path_str.as_str())],
            );

            match &err {
                SettingsError::InvalidInvoiceSchema(schema) => {
                    write_error(out, schema.code().code(), schema.message(), schema.path())?
                }
                SettingsError::InvalidInvoiceConfig(read) => {
                    write_error(out, read.code(), &read.to_string(), None)?
                }
                other => write_error(out, other.code(), &other.to_string(), None)?,
            }
            Err(CliError::config_rejected(err.to_string()))
        }
    }
}

/// Print the checkout field list
pub fn fields<W: Write>(config_path: &Path, out: &mut W) -> CliResult<()> {
    let settings = ShopSettings::load(config_path)?;
    let fields = settings.invoice_fields();

    let count = fields.len().to_string();
    log_event_with_fields(Event::FieldsCompiled, &[("count", count.as_str())]);

    write_response(out, json!({ "fields": fields }))
}

/// Validate one JSON object of submitted invoice values.
///
/// Field errors are a normal response, not a CLI failure.
pub fn validate<R: Read, W: Write>(config_path: &Path, input: &mut R, out: &mut W) -> CliResult<()> {
    let settings = ShopSettings::load(config_path)?;
    let fields = settings.invoice_fields();

    let request = read_request_from(input)?;
    if !request.is_object() {
        return Err(CliError::io_error("Input must be a JSON object"));
    }
    let input = InvoiceInput::from_json(&request);

    let errors = validate_invoice_input(&fields, &input);

    let error_count = errors.len().to_string();
    let event = if errors.is_empty() {
        Event::InputAccepted
    } else {
        Event::InputRejected
    };
    log_event_with_fields(event, &[("errors", error_count.as_str())]);

    write_response(
        out,
        json!({
            "valid": errors.is_empty(),
            "errors": errors
        }),
    )
}
