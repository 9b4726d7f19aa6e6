//! Layered environment-file discovery and parsing.
//!
//! Credentials live in a simple `KEY=value` file rather than shell
//! environment variables so that API tokens stay out of shell history.
//! The loader checks two fixed locations in order:
//!
//! 1. `.claude/env` (project-level, relative to the current directory)
//! 2. `~/.claude/env` (user-level, in the home directory)
//!
//! The first file that exists wins; the files are not merged.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Env file location, relative to the current directory (project level)
/// or the home directory (user level).
const ENV_RELATIVE_PATH: &str = ".claude/env";

/// Load the environment file from the standard search locations.
///
/// # Returns
/// A map of the key/value pairs found in the first existing env file.
///
/// # Errors
/// Returns an error when no env file exists at either location or when
/// the winning file cannot be read.
pub fn load_env() -> Result<HashMap<String, String>> {
  load_env_from(&search_paths())
}

/// Locate the env file that [`load_env`] would read, if any.
///
/// Used by `auth show` to report where credentials came from.
pub fn find_env_file() -> Option<PathBuf> {
  search_paths().into_iter().find(|path| path.exists())
}

/// Candidate env file locations, highest priority first.
fn search_paths() -> Vec<PathBuf> {
  let mut paths = vec![PathBuf::from(ENV_RELATIVE_PATH)];
  if let Ok(home) = std::env::var("HOME") {
    paths.push(PathBuf::from(home).join(ENV_RELATIVE_PATH));
  }
  paths
}

/// Load the first env file found among `paths`.
///
/// Split out from [`load_env`] so tests can point the lookup at
/// temporary directories.
pub(crate) fn load_env_from(paths: &[PathBuf]) -> Result<HashMap<String, String>> {
  for path in paths {
    if path.exists() {
      tracing::debug!(path = %path.display(), "loading env file");
      let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read env file at {}", path.display()))?;
      return Ok(parse_env(&content));
    }
  }

  bail!("No env file found at .claude/env or ~/.claude/env")
}

/// Parse `KEY=value` lines into a map.
///
/// Blank lines and `#` comments are skipped, as is any line without an
/// `=`. Keys and values are trimmed, and one layer of surrounding
/// single or double quotes is stripped from values.
fn parse_env(content: &str) -> HashMap<String, String> {
  let mut vars = HashMap::new();

  for line in content.lines() {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
      continue;
    }

    let Some((key, value)) = line.split_once('=') else {
      continue;
    };

    let key = key.trim();
    if key.is_empty() {
      continue;
    }

    let value = strip_quotes(value.trim());
    vars.insert(key.to_string(), value.to_string());
  }

  vars
}

/// Strip any run of surrounding single or double quotes from a value.
/// Nested and mismatched quotes are stripped too, so `'"token"'`
/// becomes `token`.
fn strip_quotes(value: &str) -> &str {
  value.trim_matches(['"', '\''])
}
