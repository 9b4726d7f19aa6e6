//! Typed stdin inputs and local outcomes for each API operation.
//!
//! Every operation subcommand reads one JSON object from stdin into one
//! of these input structs; serde enforces the required fields. API
//! responses are passed through as raw [`serde_json::Value`] so the
//! printed output matches what Confluence returned. Delete-style
//! operations have no response body, so they report a small locally
//! built outcome instead.

use serde::{Deserialize, Serialize};

/// Default page size used by the list/search operations.
pub const DEFAULT_LIMIT: u32 = 25;

fn default_limit() -> u32 {
  DEFAULT_LIMIT
}

fn default_true() -> bool {
  true
}

fn default_status() -> String {
  "current".to_string()
}

fn default_body_format() -> String {
  "storage".to_string()
}

/// Input for `page create`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePageInput {
  /// Identifier of the space the page is created in.
  pub space_id: String,
  /// Page title.
  pub title: String,
  /// Page body in Confluence storage format.
  pub body: String,
  /// Optional parent page identifier.
  #[serde(default)]
  pub parent_id: Option<String>,
  /// Publication status, `current` by default.
  #[serde(default = "default_status")]
  pub status: String,
}

/// Input for `page get`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetPageInput {
  pub page_id: String,
  /// Whether to request the page body at all.
  #[serde(default = "default_true")]
  pub include_body: bool,
  /// Body representation to request when `include_body` is set.
  #[serde(default = "default_body_format")]
  pub body_format: String,
}

/// Input for `page update`.
///
/// `version_number` must match the page's current version; the request
/// is sent with `version_number + 1` so Confluence can detect stale
/// writes.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePageInput {
  pub page_id: String,
  pub title: String,
  pub body: String,
  pub version_number: u64,
  /// Optional message recorded in the page history.
  #[serde(default)]
  pub version_message: String,
}

/// Input for `page delete`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeletePageInput {
  pub page_id: String,
  /// Permanently delete instead of moving to trash.
  #[serde(default)]
  pub purge: bool,
}

/// Input for `page list`; every filter is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct ListPagesInput {
  #[serde(default)]
  pub space_id: Option<String>,
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub status: Option<String>,
  #[serde(default = "default_limit")]
  pub limit: u32,
  #[serde(default)]
  pub cursor: Option<String>,
}

/// Input for `space create`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSpaceInput {
  pub name: String,
  #[serde(default)]
  pub key: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub alias: Option<String>,
  /// Restrict the new space to the creating user.
  #[serde(default)]
  pub create_private_space: bool,
}

/// Input for `space list`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListSpacesInput {
  #[serde(default = "default_limit")]
  pub limit: u32,
  #[serde(default)]
  pub cursor: Option<String>,
}

/// Input for `space delete`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteSpaceInput {
  pub space_key: String,
}

/// Input for `comment create`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentInput {
  pub page_id: String,
  /// Comment body in Confluence storage format.
  pub body: String,
}

/// Input for `comment delete`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteCommentInput {
  pub comment_id: String,
}

/// Input for `label add`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddLabelInput {
  pub page_id: String,
  pub label: String,
}

/// Input for `label list`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListLabelsInput {
  pub page_id: String,
  #[serde(default = "default_limit")]
  pub limit: u32,
  #[serde(default)]
  pub cursor: Option<String>,
}

/// Input for `label remove`.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveLabelInput {
  pub page_id: String,
  pub label_id: String,
}

/// Input for `attachment delete`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteAttachmentInput {
  pub attachment_id: String,
  #[serde(default)]
  pub purge: bool,
}

/// Input for `search` (CQL).
#[derive(Debug, Clone, Deserialize)]
pub struct SearchInput {
  /// CQL query string, e.g. `type=page AND space=DEV`.
  pub query: String,
  #[serde(default = "default_limit")]
  pub limit: u32,
  #[serde(default)]
  pub cursor: Option<String>,
}

/// Printed result of `page delete`.
#[derive(Debug, Clone, Serialize)]
pub struct DeletePageOutcome {
  pub success: bool,
  pub page_id: String,
  pub purged: bool,
}

/// Printed result of `space delete`.
///
/// Space deletion is asynchronous on the Confluence side, so the
/// outcome carries an explanatory message instead of a final state.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteSpaceOutcome {
  pub success: bool,
  pub space_key: String,
  pub message: String,
}

/// Printed result of `comment delete`.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteCommentOutcome {
  pub success: bool,
  pub comment_id: String,
}

/// Printed result of `label remove`.
#[derive(Debug, Clone, Serialize)]
pub struct RemoveLabelOutcome {
  pub success: bool,
  pub page_id: String,
  pub label_id: String,
}

/// Printed result of `attachment delete`.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteAttachmentOutcome {
  pub success: bool,
  pub attachment_id: String,
  pub purged: bool,
}
