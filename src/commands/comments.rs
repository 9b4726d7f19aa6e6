//! Footer comment operation handlers.

use anyhow::Result;

use super::{connect, print_json};
use crate::cli::{Cli, CommentCommand};
use crate::confluence::ConfluenceApi;
use crate::confluence::models::{CreateCommentInput, DeleteCommentInput, DeleteCommentOutcome};
use crate::input::read_input;

/// Dispatch the `comment` subcommands.
pub(crate) async fn handle_comment_command(command: &CommentCommand, cli: &Cli) -> Result<()> {
  match command {
    CommentCommand::Create => {
      let input: CreateCommentInput = read_input()?;
      let client = connect(cli).await?;
      let comment = client.create_comment(&input).await?;
      print_json(&comment)
    }
    CommentCommand::Delete => {
      let input: DeleteCommentInput = read_input()?;
      let client = connect(cli).await?;
      let success = client.delete_comment(&input.comment_id).await?;
      print_json(&DeleteCommentOutcome {
        success,
        comment_id: input.comment_id,
      })
    }
  }
}
