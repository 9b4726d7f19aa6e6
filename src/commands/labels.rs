//! Page label operation handlers.

use anyhow::Result;

use super::{connect, print_json};
use crate::cli::{Cli, LabelCommand};
use crate::confluence::ConfluenceApi;
use crate::confluence::models::{AddLabelInput, ListLabelsInput, RemoveLabelInput, RemoveLabelOutcome};
use crate::input::read_input;

/// Dispatch the `label` subcommands.
pub(crate) async fn handle_label_command(command: &LabelCommand, cli: &Cli) -> Result<()> {
  match command {
    LabelCommand::Add => {
      let input: AddLabelInput = read_input()?;
      let client = connect(cli).await?;
      let label = client.add_label(&input).await?;
      print_json(&label)
    }
    LabelCommand::List => {
      let input: ListLabelsInput = read_input()?;
      let client = connect(cli).await?;
      let labels = client.list_labels(&input).await?;
      print_json(&labels)
    }
    LabelCommand::Remove => {
      let input: RemoveLabelInput = read_input()?;
      let client = connect(cli).await?;
      let success = client.remove_label(&input.page_id, &input.label_id).await?;
      print_json(&RemoveLabelOutcome {
        success,
        page_id: input.page_id,
        label_id: input.label_id,
      })
    }
  }
}
