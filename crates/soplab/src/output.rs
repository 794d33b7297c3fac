use std::io::{self, Write};

use serde_json::Value;

/// Pretty-print a JSON value to stdout
pub fn print_json(value: &Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    writeln!(out, "{text}")
}

/// Print plain text to stdout
pub fn print_text(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

/// Print without a trailing newline (rendered documents end with their own)
pub fn print_raw(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "{s}")
}
