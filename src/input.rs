//! Shared stdin handling for the operation subcommands.
//!
//! Every operation reads exactly one JSON object from standard input.
//! This helper owns the read-parse-validate skeleton so individual
//! commands stay straight-line.

use std::io::Read;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Read and deserialize the JSON input document from stdin.
///
/// # Errors
/// Returns an error when stdin cannot be read, the input is not valid
/// JSON, or required fields are missing (the serde error names the
/// offending field).
pub fn read_input<T: DeserializeOwned>() -> Result<T> {
  let mut raw = String::new();
  std::io::stdin()
    .read_to_string(&mut raw)
    .context("Failed to read from stdin")?;

  parse_input(&raw)
}

/// Deserialize an input document from a string.
pub fn parse_input<T: DeserializeOwned>(raw: &str) -> Result<T> {
  serde_json::from_str(raw).context("Invalid JSON input")
}

/// Serialize an API response or outcome for stdout.
pub fn render_output<T: serde::Serialize>(value: &T) -> Result<String> {
  serde_json::to_string_pretty(value).context("Failed to serialize output")
}
