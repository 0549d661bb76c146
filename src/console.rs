// src/console.rs
use std::io::{self, Write};

use crate::error::{OsintError, OsintResult};

/// Prefix attached to every console line.
pub const LOG_PREFIX: &str = "[osint-utils] ";

/// Write a prefixed message as a single line to the given writer.
pub fn write_line<W: Write>(out: &mut W, message: &str) -> OsintResult<()> {
    writeln!(out, "{}{}", LOG_PREFIX, message).map_err(|e| OsintError::Console(e.to_string()))
}

/// Log a message to standard output.
pub fn log(message: &str) -> OsintResult<()> {
    write_line(&mut io::stdout(), message)
}
