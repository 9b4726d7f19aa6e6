//! CLI subcommand handlers.
//!
//! One module per Confluence resource, plus auth and version. Each
//! operation handler follows the same straight-line shape: read the
//! stdin JSON, build the client, call the operation, print the result.

pub mod attachments;
pub mod auth;
pub mod comments;
pub mod labels;
pub mod pages;
pub mod search;
pub mod spaces;
pub mod version;

use anyhow::Result;
use serde::Serialize;

use crate::cli::Cli;
use crate::config::Config;
use crate::confluence::{ConfluenceApi, ConfluenceClient};
use crate::input::render_output;

/// Resolve configuration and build a ready-to-use client.
///
/// Runs the credential validation probe first unless `--no-auth-check`
/// was passed, so operations fail with auth guidance instead of a
/// generic HTTP error.
pub(crate) async fn connect(cli: &Cli) -> Result<ConfluenceClient> {
  let config = Config::load()?;
  let client = ConfluenceClient::new(config)?;

  if !cli.behavior.no_auth_check {
    client.validate_auth().await?;
  }

  Ok(client)
}

/// Print an API response or outcome as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
  println!("{}", render_output(value)?);
  Ok(())
}
