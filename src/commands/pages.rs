//! Page operation handlers.

use anyhow::Result;

use super::{connect, print_json};
use crate::cli::{Cli, PageCommand};
use crate::confluence::ConfluenceApi;
use crate::confluence::models::{
  CreatePageInput, DeletePageInput, DeletePageOutcome, GetPageInput, ListPagesInput, UpdatePageInput,
};
use crate::input::read_input;

/// Dispatch the `page` subcommands.
///
/// Stdin is parsed before the client is built so malformed input fails
/// fast without touching the network.
pub(crate) async fn handle_page_command(command: &PageCommand, cli: &Cli) -> Result<()> {
  match command {
    PageCommand::Create => {
      let input: CreatePageInput = read_input()?;
      let client = connect(cli).await?;
      let page = client.create_page(&input).await?;
      print_json(&page)
    }
    PageCommand::Get => {
      let input: GetPageInput = read_input()?;
      let client = connect(cli).await?;
      let page = client.get_page(&input).await?;
      print_json(&page)
    }
    PageCommand::Update => {
      let input: UpdatePageInput = read_input()?;
      let client = connect(cli).await?;
      let page = client.update_page(&input).await?;
      print_json(&page)
    }
    PageCommand::Delete => {
      let input: DeletePageInput = read_input()?;
      let client = connect(cli).await?;
      let success = client.delete_page(&input.page_id, input.purge).await?;
      print_json(&DeletePageOutcome {
        success,
        page_id: input.page_id,
        purged: input.purge,
      })
    }
    PageCommand::List => {
      let input: ListPagesInput = read_input()?;
      let client = connect(cli).await?;
      let pages = client.list_pages(&input).await?;
      print_json(&pages)
    }
  }
}
