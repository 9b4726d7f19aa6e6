//! Command-line interface definitions for confluence-ops.
//!
//! Every Confluence operation is a subcommand; the operation's
//! parameters arrive as a JSON object on stdin rather than as flags, so
//! invocations compose cleanly with other JSON tooling.

use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::color::ColorScheme;
use crate::commands::auth::handle_auth_command;
use crate::commands::version::handle_version_command;
use crate::commands::{attachments, comments, labels, pages, search, spaces};

/// confluence-ops - Perform Confluence REST API operations
#[derive(Debug, Parser)]
#[command(
  name = "confluence-ops",
  version,
  about = "Perform Confluence REST API operations from stdin JSON",
  long_about = "A command-line tool for Confluence REST API operations.\n\
                Each operation reads a JSON object from standard input and prints the\n\
                JSON response. Credentials are read from .claude/env or ~/.claude/env.",
  styles = get_clap_styles()
)]
pub struct Cli {
  /// Operation to perform
  #[command(subcommand)]
  pub command: Command,

  /// Behavior options
  #[command(flatten)]
  pub behavior: BehaviorOptions,
}

/// Top-level subcommands, one group per Confluence resource.
#[derive(Debug, Subcommand)]
pub enum Command {
  /// Page operations (create, get, update, delete, list)
  Page {
    #[command(subcommand)]
    command: PageCommand,
  },

  /// Space operations (create, list, delete)
  Space {
    #[command(subcommand)]
    command: SpaceCommand,
  },

  /// Footer comment operations (create, delete)
  Comment {
    #[command(subcommand)]
    command: CommentCommand,
  },

  /// Page label operations (add, list, remove)
  Label {
    #[command(subcommand)]
    command: LabelCommand,
  },

  /// Attachment operations (delete)
  Attachment {
    #[command(subcommand)]
    command: AttachmentCommand,
  },

  /// Search content with a CQL query
  Search,

  /// Authentication testing and inspection
  Auth {
    #[command(subcommand)]
    command: AuthCommand,
  },

  /// Display version and build information
  Version {
    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Show only version number
    #[arg(long)]
    short: bool,
  },
}

/// Page subcommands.
#[derive(Debug, Subcommand)]
pub enum PageCommand {
  /// Create a page (stdin: space_id, title, body[, parent_id, status])
  Create,
  /// Get a page by ID (stdin: page_id[, include_body, body_format])
  Get,
  /// Update a page (stdin: page_id, title, body, version_number[, version_message])
  Update,
  /// Delete a page (stdin: page_id[, purge])
  Delete,
  /// List pages (stdin: [space_id, title, status, limit, cursor])
  List,
}

/// Space subcommands.
#[derive(Debug, Subcommand)]
pub enum SpaceCommand {
  /// Create a space (stdin: name[, key, description, alias, create_private_space])
  Create,
  /// List spaces (stdin: [limit, cursor])
  List,
  /// Delete a space by key (stdin: space_key)
  Delete,
}

/// Comment subcommands.
#[derive(Debug, Subcommand)]
pub enum CommentCommand {
  /// Create a footer comment on a page (stdin: page_id, body)
  Create,
  /// Delete a footer comment (stdin: comment_id)
  Delete,
}

/// Label subcommands.
#[derive(Debug, Subcommand)]
pub enum LabelCommand {
  /// Add a label to a page (stdin: page_id, label)
  Add,
  /// List labels on a page (stdin: page_id[, limit, cursor])
  List,
  /// Remove a label from a page (stdin: page_id, label_id)
  Remove,
}

/// Attachment subcommands.
#[derive(Debug, Subcommand)]
pub enum AttachmentCommand {
  /// Delete an attachment (stdin: attachment_id[, purge])
  Delete,
}

/// Authentication subcommands.
#[derive(Debug, Subcommand)]
pub enum AuthCommand {
  /// Validate the configured credentials with a live probe request
  Test,
  /// Show the resolved configuration without contacting the server
  Show,
}

/// Behavior options shared by every subcommand.
#[derive(Debug, Parser)]
pub struct BehaviorOptions {
  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, global = true, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, global = true, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Skip the credential validation probe before the operation
  #[arg(long, global = true)]
  pub no_auth_check: bool,

  /// Colorize output
  #[arg(long, global = true, value_enum, default_value = "auto", value_name = "WHEN")]
  pub color: ColorOption,
}

/// Color output options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorOption {
  Auto,
  Always,
  Never,
}

/// Parse CLI arguments, initialize shared services, and dispatch to the
/// chosen command.
pub async fn run() {
  let cli = Cli::parse();

  init_tracing(&cli.behavior);

  let colors = ColorScheme::new(cli.behavior.color);

  let result = dispatch(&cli, &colors).await;

  if let Err(e) = result {
    // {:#} prints the whole context chain on one line.
    eprintln!("{} {:#}", colors.error("Error:"), e);
    process::exit(1);
  }
}

async fn dispatch(cli: &Cli, colors: &ColorScheme) -> Result<()> {
  match &cli.command {
    Command::Page { command } => pages::handle_page_command(command, cli).await,
    Command::Space { command } => spaces::handle_space_command(command, cli).await,
    Command::Comment { command } => comments::handle_comment_command(command, cli).await,
    Command::Label { command } => labels::handle_label_command(command, cli).await,
    Command::Attachment { command } => attachments::handle_attachment_command(command, cli).await,
    Command::Search => search::handle_search_command(cli).await,
    Command::Auth { command } => handle_auth_command(command, colors).await,
    Command::Version { json, short } => {
      handle_version_command(*json, *short, colors);
      Ok(())
    }
  }
}

fn init_tracing(behavior: &BehaviorOptions) {
  let level = if behavior.quiet {
    LevelFilter::ERROR
  } else {
    match behavior.verbose {
      0 => LevelFilter::WARN,
      1 => LevelFilter::INFO,
      2 => LevelFilter::DEBUG,
      _ => LevelFilter::TRACE,
    }
  };

  let env_filter = EnvFilter::builder()
    .with_default_directive(level.into())
    .from_env_lossy();

  let _ = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .try_init();
}

/// Get custom styles for clap help output
fn get_clap_styles() -> clap::builder::Styles {
  use clap::builder::styling::{AnsiColor, Effects};

  clap::builder::Styles::styled()
    .header(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .usage(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
    .literal(AnsiColor::BrightGreen.on_default())
    .placeholder(AnsiColor::BrightCyan.on_default())
    .error(AnsiColor::BrightRed.on_default() | Effects::BOLD)
    .valid(AnsiColor::BrightGreen.on_default())
    .invalid(AnsiColor::BrightRed.on_default())
}
