//! Configuration resolution for the Confluence client.
//!
//! Turns the raw key/value pairs from the env file into a validated
//! [`Config`]: a normalized base URL, exactly one authentication
//! scheme, and a request timeout.
//!
//! Two authentication schemes are supported:
//! - Personal Access Token (`CONFLUENCE_PAT`) using Bearer auth
//! - Basic auth (`CONFLUENCE_EMAIL` + `CONFLUENCE_API_TOKEN`)
//!
//! The PAT takes precedence when both are configured.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use url::Url;

use crate::env_file::load_env;

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: f64 = 10.0;

/// Authentication scheme applied to every API request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthScheme {
  /// Personal Access Token, sent as `Authorization: Bearer <token>`.
  Pat(String),
  /// Email + API token, sent as HTTP Basic auth.
  Basic { email: String, token: String },
}

impl AuthScheme {
  /// Short label used in log lines and `auth show` output.
  pub fn label(&self) -> &'static str {
    match self {
      Self::Pat(_) => "pat",
      Self::Basic { .. } => "basic",
    }
  }
}

/// Validated client configuration resolved from the env file.
#[derive(Debug, Clone)]
pub struct Config {
  /// Confluence base URL with any trailing slash removed.
  pub base_url: String,
  /// The single authentication scheme in effect.
  pub auth: AuthScheme,
  /// HTTP request timeout.
  pub timeout: Duration,
}

impl Config {
  /// Load and validate configuration from the standard env file
  /// locations.
  ///
  /// # Errors
  /// Returns an error when no env file exists, `CONFLUENCE_URL` is
  /// missing or invalid, or neither authentication scheme is
  /// configured.
  pub fn load() -> Result<Self> {
    let env = load_env()?;
    Self::from_env(&env)
  }

  /// Build a configuration from already-loaded env file pairs.
  pub fn from_env(env: &HashMap<String, String>) -> Result<Self> {
    let base_url = env
      .get("CONFLUENCE_URL")
      .map(|url| url.trim_end_matches('/').to_string())
      .filter(|url| !url.is_empty())
      .context("Missing required env var CONFLUENCE_URL")?;

    Url::parse(&base_url).with_context(|| format!("Invalid CONFLUENCE_URL: {base_url}"))?;

    let auth = resolve_auth(env)?;
    let timeout = resolve_timeout(env);

    tracing::debug!(
      base_url = %base_url,
      auth_type = auth.label(),
      timeout_secs = timeout.as_secs_f64(),
      "Confluence client configured"
    );

    Ok(Self {
      base_url,
      auth,
      timeout,
    })
  }
}

/// Pick the authentication scheme from the configured credentials.
///
/// A PAT wins over Basic credentials when both are present.
fn resolve_auth(env: &HashMap<String, String>) -> Result<AuthScheme> {
  let pat = env.get("CONFLUENCE_PAT").filter(|v| !v.is_empty());
  let email = env.get("CONFLUENCE_EMAIL").filter(|v| !v.is_empty());
  let token = env.get("CONFLUENCE_API_TOKEN").filter(|v| !v.is_empty());

  if let Some(pat) = pat {
    tracing::debug!("using PAT authentication");
    return Ok(AuthScheme::Pat(pat.clone()));
  }

  if let (Some(email), Some(token)) = (email, token) {
    tracing::debug!("using Basic authentication");
    return Ok(AuthScheme::Basic {
      email: email.clone(),
      token: token.clone(),
    });
  }

  bail!(
    "No authentication configured. Please set either:\n  \
     - CONFLUENCE_PAT for Personal Access Token authentication, or\n  \
     - CONFLUENCE_EMAIL and CONFLUENCE_API_TOKEN for Basic authentication"
  )
}

/// Resolve the request timeout from `CONFLUENCE_TIMEOUT`.
///
/// Invalid values log a warning and fall back to the default rather
/// than failing the whole invocation.
fn resolve_timeout(env: &HashMap<String, String>) -> Duration {
  match env.get("CONFLUENCE_TIMEOUT").filter(|v| !v.is_empty()) {
    Some(raw) => match raw.parse::<f64>() {
      Ok(secs) if secs > 0.0 => {
        tracing::info!(timeout_secs = secs, "using configured timeout");
        Duration::from_secs_f64(secs)
      }
      _ => {
        tracing::warn!(
          value = %raw,
          default_secs = DEFAULT_TIMEOUT_SECS,
          "invalid CONFLUENCE_TIMEOUT value, using default"
        );
        Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS)
      }
    },
    None => Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect()
  }

  #[test]
  fn test_config_basic_auth() {
    let config = Config::from_env(&env(&[
      ("CONFLUENCE_URL", "https://example.atlassian.net"),
      ("CONFLUENCE_EMAIL", "user@example.com"),
      ("CONFLUENCE_API_TOKEN", "token123"),
    ]))
    .unwrap();

    assert_eq!(config.base_url, "https://example.atlassian.net");
    assert_eq!(
      config.auth,
      AuthScheme::Basic {
        email: "user@example.com".to_string(),
        token: "token123".to_string(),
      }
    );
  }

  #[test]
  fn test_config_pat_auth() {
    let config = Config::from_env(&env(&[
      ("CONFLUENCE_URL", "https://example.atlassian.net"),
      ("CONFLUENCE_PAT", "pat-token"),
    ]))
    .unwrap();

    assert_eq!(config.auth, AuthScheme::Pat("pat-token".to_string()));
  }

  #[test]
  fn test_config_pat_takes_precedence_over_basic() {
    let config = Config::from_env(&env(&[
      ("CONFLUENCE_URL", "https://example.atlassian.net"),
      ("CONFLUENCE_PAT", "pat-token"),
      ("CONFLUENCE_EMAIL", "user@example.com"),
      ("CONFLUENCE_API_TOKEN", "token123"),
    ]))
    .unwrap();

    assert_eq!(config.auth, AuthScheme::Pat("pat-token".to_string()));
  }

  #[test]
  fn test_config_strips_trailing_slash() {
    let config = Config::from_env(&env(&[
      ("CONFLUENCE_URL", "https://example.atlassian.net/"),
      ("CONFLUENCE_PAT", "pat-token"),
    ]))
    .unwrap();

    assert_eq!(config.base_url, "https://example.atlassian.net");
  }

  #[test]
  fn test_config_missing_url() {
    let result = Config::from_env(&env(&[("CONFLUENCE_PAT", "pat-token")]));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("CONFLUENCE_URL"));
  }

  #[test]
  fn test_config_empty_url_treated_as_missing() {
    let result = Config::from_env(&env(&[("CONFLUENCE_URL", ""), ("CONFLUENCE_PAT", "pat-token")]));
    assert!(result.is_err());
  }

  #[test]
  fn test_config_invalid_url() {
    let result = Config::from_env(&env(&[("CONFLUENCE_URL", "not a url"), ("CONFLUENCE_PAT", "x")]));
    assert!(result.is_err());
  }

  #[test]
  fn test_config_no_auth_configured() {
    let result = Config::from_env(&env(&[("CONFLUENCE_URL", "https://example.atlassian.net")]));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("No authentication configured"));
  }

  #[test]
  fn test_config_email_without_token_is_incomplete() {
    let result = Config::from_env(&env(&[
      ("CONFLUENCE_URL", "https://example.atlassian.net"),
      ("CONFLUENCE_EMAIL", "user@example.com"),
    ]));
    assert!(result.is_err());
  }

  #[test]
  fn test_config_default_timeout() {
    let config = Config::from_env(&env(&[
      ("CONFLUENCE_URL", "https://example.atlassian.net"),
      ("CONFLUENCE_PAT", "pat-token"),
    ]))
    .unwrap();

    assert_eq!(config.timeout, Duration::from_secs(10));
  }

  #[test]
  fn test_config_configured_timeout() {
    let config = Config::from_env(&env(&[
      ("CONFLUENCE_URL", "https://example.atlassian.net"),
      ("CONFLUENCE_PAT", "pat-token"),
      ("CONFLUENCE_TIMEOUT", "2.5"),
    ]))
    .unwrap();

    assert_eq!(config.timeout, Duration::from_secs_f64(2.5));
  }

  #[test]
  fn test_config_invalid_timeout_falls_back_to_default() {
    let config = Config::from_env(&env(&[
      ("CONFLUENCE_URL", "https://example.atlassian.net"),
      ("CONFLUENCE_PAT", "pat-token"),
      ("CONFLUENCE_TIMEOUT", "soon"),
    ]))
    .unwrap();

    assert_eq!(config.timeout, Duration::from_secs(10));
  }

  #[test]
  fn test_config_negative_timeout_falls_back_to_default() {
    let config = Config::from_env(&env(&[
      ("CONFLUENCE_URL", "https://example.atlassian.net"),
      ("CONFLUENCE_PAT", "pat-token"),
      ("CONFLUENCE_TIMEOUT", "-3"),
    ]))
    .unwrap();

    assert_eq!(config.timeout, Duration::from_secs(10));
  }

  #[test]
  fn test_auth_scheme_labels() {
    assert_eq!(AuthScheme::Pat("x".to_string()).label(), "pat");
    assert_eq!(
      AuthScheme::Basic {
        email: "a".to_string(),
        token: "b".to_string()
      }
      .label(),
      "basic"
    );
  }
}
