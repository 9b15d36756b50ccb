//! Command output: JSON documents on stdout, status lines on stderr

use colored::*;
use serde::Serialize;
use std::io::Write;

/// Pretty-print `value` as one JSON document
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

pub fn action(message: &str) {
    eprintln!("{} {}", "▶".cyan(), message);
}
