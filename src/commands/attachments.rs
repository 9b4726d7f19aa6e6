//! Attachment operation handlers.

use anyhow::Result;

use super::{connect, print_json};
use crate::cli::{AttachmentCommand, Cli};
use crate::confluence::ConfluenceApi;
use crate::confluence::models::{DeleteAttachmentInput, DeleteAttachmentOutcome};
use crate::input::read_input;

/// Dispatch the `attachment` subcommands.
pub(crate) async fn handle_attachment_command(command: &AttachmentCommand, cli: &Cli) -> Result<()> {
  match command {
    AttachmentCommand::Delete => {
      let input: DeleteAttachmentInput = read_input()?;
      let client = connect(cli).await?;
      let success = client.delete_attachment(&input.attachment_id, input.purge).await?;
      print_json(&DeleteAttachmentOutcome {
        success,
        attachment_id: input.attachment_id,
        purged: input.purge,
      })
    }
  }
}
