//! Space operation handlers.

use anyhow::Result;

use super::{connect, print_json};
use crate::cli::{Cli, SpaceCommand};
use crate::confluence::ConfluenceApi;
use crate::confluence::models::{CreateSpaceInput, DeleteSpaceInput, DeleteSpaceOutcome, ListSpacesInput};
use crate::input::read_input;

/// Dispatch the `space` subcommands.
pub(crate) async fn handle_space_command(command: &SpaceCommand, cli: &Cli) -> Result<()> {
  match command {
    SpaceCommand::Create => {
      let input: CreateSpaceInput = read_input()?;
      let client = connect(cli).await?;
      let space = client.create_space(&input).await?;
      print_json(&space)
    }
    SpaceCommand::List => {
      let input: ListSpacesInput = read_input()?;
      let client = connect(cli).await?;
      let spaces = client.list_spaces(&input).await?;
      print_json(&spaces)
    }
    SpaceCommand::Delete => {
      let input: DeleteSpaceInput = read_input()?;
      let client = connect(cli).await?;
      let success = client.delete_space(&input.space_key).await?;
      print_json(&DeleteSpaceOutcome {
        success,
        space_key: input.space_key,
        message: "Space deletion initiated. This is an asynchronous operation.".to_string(),
      })
    }
  }
}
