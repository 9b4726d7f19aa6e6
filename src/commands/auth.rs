//! Authentication subcommand handlers.
//!
//! Covers both `confluence-ops auth test`, which performs a live probe
//! request, and `confluence-ops auth show`, which prints the resolved
//! configuration without contacting the server.

use anyhow::Result;

use crate::cli::AuthCommand;
use crate::color::ColorScheme;
use crate::config::{AuthScheme, Config};
use crate::confluence::{ConfluenceApi, ConfluenceClient};
use crate::env_file::{find_env_file, load_env};

/// Dispatch the authentication subcommands.
pub(crate) async fn handle_auth_command(command: &AuthCommand, colors: &ColorScheme) -> Result<()> {
  match command {
    AuthCommand::Test => test_auth(colors).await,
    AuthCommand::Show => show_auth_config(colors),
  }
}

/// Validate the configured credentials with a live probe request.
async fn test_auth(colors: &ColorScheme) -> Result<()> {
  let config = Config::load()?;

  eprintln!("{} {}", colors.info("→"), colors.info("Testing authentication"));
  eprintln!("  {}: {}", colors.emphasis("URL"), colors.link(&config.base_url));
  eprintln!("  {}: {}", colors.emphasis("Auth type"), config.auth.label());

  let client = ConfluenceClient::new(config)?;
  client.validate_auth().await?;

  eprintln!(
    "{} {}",
    colors.success("✓"),
    colors.success("Authentication successful!")
  );
  eprintln!("{} Your credentials are working correctly.", colors.info("ℹ"));
  Ok(())
}

/// Display the resolved configuration and where it came from.
///
/// Unlike `auth test`, incomplete configuration is reported as a
/// warning rather than an error so users can see what is missing.
fn show_auth_config(colors: &ColorScheme) -> Result<()> {
  eprintln!("{}\n", colors.emphasis("Authentication Configuration"));

  let Some(env_path) = find_env_file() else {
    eprintln!(
      "{} {}",
      colors.warning("⚠"),
      colors.warning("No env file found at .claude/env or ~/.claude/env")
    );
    eprintln!("\n  Create one with:");
    eprintln!("    CONFLUENCE_URL=https://your-instance.atlassian.net");
    eprintln!("    CONFLUENCE_PAT=your-personal-access-token");
    eprintln!("  or:");
    eprintln!("    CONFLUENCE_EMAIL=your.email@example.com");
    eprintln!("    CONFLUENCE_API_TOKEN=your-api-token");
    return Ok(());
  };

  eprintln!("{}: {}", colors.emphasis("Env file"), env_path.display());

  let env = load_env()?;

  match env.get("CONFLUENCE_URL").filter(|v| !v.is_empty()) {
    Some(url) => eprintln!("{}: {}", colors.emphasis("Base URL"), colors.link(url)),
    None => {
      eprintln!("{}: {}", colors.emphasis("Base URL"), colors.dimmed("(not set)"));
      eprintln!(
        "  {} CONFLUENCE_URL is required for API access",
        colors.warning("⚠")
      );
    }
  }

  match Config::from_env(&env) {
    Ok(config) => {
      match &config.auth {
        AuthScheme::Pat(pat) => {
          eprintln!("{}: Personal Access Token (Bearer)", colors.emphasis("Auth"));
          eprintln!("  {}: {}", colors.dimmed("Token"), colors.dimmed(mask_token(pat)));
        }
        AuthScheme::Basic { email, token } => {
          eprintln!("{}: Basic (email + API token)", colors.emphasis("Auth"));
          eprintln!("  {}: {}", colors.dimmed("Email"), email);
          eprintln!("  {}: {}", colors.dimmed("Token"), colors.dimmed(mask_token(token)));
        }
      }
      eprintln!(
        "{}: {:.1}s",
        colors.emphasis("Timeout"),
        config.timeout.as_secs_f64()
      );
      eprintln!("\n{} {}", colors.success("✓"), colors.success("Credentials configured"));
    }
    Err(e) => {
      eprintln!("\n{} {:#}", colors.warning("⚠"), e);
    }
  }

  Ok(())
}

/// Mask a secret for display, keeping a short recognizable prefix.
/// Counts characters rather than bytes so multi-byte tokens are safe.
fn mask_token(token: &str) -> String {
  let char_count = token.chars().count();
  if char_count > 8 {
    let prefix: String = token.chars().take(4).collect();
    format!("{}{}", prefix, "*".repeat(char_count - 4))
  } else {
    "*".repeat(char_count)
  }
}
