//! Trait definitions for interacting with Confluence.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use super::models::{
  AddLabelInput, CreateCommentInput, CreatePageInput, CreateSpaceInput, GetPageInput, ListLabelsInput,
  ListPagesInput, ListSpacesInput, SearchInput, UpdatePageInput,
};

/// Trait covering every Confluence API operation the CLI performs
/// (enables testing with fake implementations).
///
/// Mutation and read operations return the raw JSON document from the
/// API; delete operations return `true` when Confluence acknowledged
/// the deletion.
#[async_trait]
pub trait ConfluenceApi: Send + Sync {
  /// Create a page in a space.
  async fn create_page(&self, input: &CreatePageInput) -> Result<Value>;

  /// Fetch a page by ID, optionally with its body.
  async fn get_page(&self, input: &GetPageInput) -> Result<Value>;

  /// Replace a page's title and body, bumping its version.
  async fn update_page(&self, input: &UpdatePageInput) -> Result<Value>;

  /// Delete a page, optionally purging it from the trash.
  async fn delete_page(&self, page_id: &str, purge: bool) -> Result<bool>;

  /// List pages matching the given filters.
  async fn list_pages(&self, input: &ListPagesInput) -> Result<Value>;

  /// Create a space.
  async fn create_space(&self, input: &CreateSpaceInput) -> Result<Value>;

  /// List spaces.
  async fn list_spaces(&self, input: &ListSpacesInput) -> Result<Value>;

  /// Delete a space by key. Asynchronous on the Confluence side; only
  /// available through the v1 API.
  async fn delete_space(&self, space_key: &str) -> Result<bool>;

  /// Create a footer comment on a page.
  async fn create_comment(&self, input: &CreateCommentInput) -> Result<Value>;

  /// Delete a footer comment.
  async fn delete_comment(&self, comment_id: &str) -> Result<bool>;

  /// Add a label to a page.
  async fn add_label(&self, input: &AddLabelInput) -> Result<Value>;

  /// List the labels on a page.
  async fn list_labels(&self, input: &ListLabelsInput) -> Result<Value>;

  /// Remove a label from a page.
  async fn remove_label(&self, page_id: &str, label_id: &str) -> Result<bool>;

  /// Delete an attachment, optionally purging it from the trash.
  async fn delete_attachment(&self, attachment_id: &str, purge: bool) -> Result<bool>;

  /// Search content with a CQL query.
  async fn search(&self, input: &SearchInput) -> Result<Value>;

  /// Validate the configured credentials with a lightweight probe
  /// request.
  async fn validate_auth(&self) -> Result<()>;
}
