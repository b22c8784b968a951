//! JSON I/O handling for CLI
//!
//! - Input: single JSON object (stdin for the binary)
//! - Output: single JSON object per line (stdout for the binary)
//! - UTF-8 only

use std::io::{Read, Write};

use serde_json::{json, Value};

use super::errors::{CliError, CliResult};

/// Read one JSON request from a reader
pub fn read_request_from<R: Read>(reader: &mut R) -> CliResult<Value> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    if content.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    Ok(serde_json::from_str(&content)?)
}

/// Write a success response
pub fn write_response<W: Write>(out: &mut W, data: Value) -> CliResult<()> {
    write_value(out, &json!({
        "status": "ok",
        "data": data
    }))
}

/// Write an error response. `path` is omitted when absent.
pub fn write_error<W: Write>(
    out: &mut W,
    code: &str,
    message: &str,
    path: Option<&str>,
) -> CliResult<()> {
    let mut response = json!({
        "status": "error",
        "code": code,
        "message": message
    });
    if let Some(path) = path {
        response["path"] = Value::from(path);
    }
    write_value(out, &response)
}

fn write_value<W: Write>(out: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
