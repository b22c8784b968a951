//! CLI module
//!
//! Provides command-line interface for:
//! - check: save-time validation of the invoice configuration
//! - fields: compiled checkout field list
//! - validate: validate submitted invoice values

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, fields, run, run_command, validate};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request_from, write_error, write_response};
