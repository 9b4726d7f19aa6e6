//! CQL content search handler.

use anyhow::Result;

use super::{connect, print_json};
use crate::cli::Cli;
use crate::confluence::ConfluenceApi;
use crate::confluence::models::SearchInput;
use crate::input::read_input;

/// Run a CQL search from stdin input.
pub(crate) async fn handle_search_command(cli: &Cli) -> Result<()> {
  let input: SearchInput = read_input()?;
  let client = connect(cli).await?;
  let results = client.search(&input).await?;
  print_json(&results)
}
