//! Fake Confluence API client for testing
//!
//! This module provides a stub implementation of the Confluence API
//! that serves predefined documents from memory without making any
//! network requests. Mutating operations update the in-memory state so
//! tests can exercise complete create/read/update/delete flows.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use confluence_ops::confluence::ConfluenceApi;
use confluence_ops::confluence::models::{
  AddLabelInput, CreateCommentInput, CreatePageInput, CreateSpaceInput, GetPageInput, ListLabelsInput,
  ListPagesInput, ListSpacesInput, SearchInput, UpdatePageInput,
};
use serde_json::{Value, json};

use crate::common::fixtures;

/// In-memory state behind the fake client.
#[derive(Default)]
struct FakeState {
  pages: HashMap<String, Value>,
  spaces: HashMap<String, Value>,
  comments: HashMap<String, Value>,
  labels: HashMap<String, Vec<Value>>,
  attachments: HashMap<String, Value>,
  search_results: Option<Value>,
  next_id: u64,
}

/// A fake Confluence client backed by in-memory maps.
pub struct FakeConfluenceClient {
  state: Mutex<FakeState>,
  auth_should_succeed: bool,
}

impl FakeConfluenceClient {
  /// Create a new fake client with no content.
  pub fn new() -> Self {
    Self {
      state: Mutex::new(FakeState {
        next_id: 800_000,
        ..FakeState::default()
      }),
      auth_should_succeed: true,
    }
  }

  /// Create a fake client seeded with the sample fixtures.
  pub fn with_sample_content() -> Self {
    let client = Self::new();
    {
      let mut state = client.state.lock().unwrap();
      for page in [
        fixtures::sample_page_response(),
        fixtures::sample_child_page_response(),
        fixtures::sample_draft_page_response(),
      ] {
        let id = page["id"].as_str().unwrap().to_string();
        state.pages.insert(id, page);
      }

      let space = fixtures::sample_space_response();
      state.spaces.insert("DOCS".to_string(), space);

      state
        .labels
        .insert("123456".to_string(), vec![fixtures::sample_label_response()]);

      state
        .attachments
        .insert("66001".to_string(), json!({ "id": "66001", "title": "diagram.png" }));

      state.search_results = Some(fixtures::sample_search_results());
    }
    client
  }

  /// Configure whether the auth probe should succeed.
  pub fn set_auth_success(&mut self, should_succeed: bool) {
    self.auth_should_succeed = should_succeed;
  }

  fn allocate_id(state: &mut FakeState) -> String {
    state.next_id += 1;
    state.next_id.to_string()
  }
}

impl Default for FakeConfluenceClient {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl ConfluenceApi for FakeConfluenceClient {
  async fn create_page(&self, input: &CreatePageInput) -> Result<Value> {
    let mut state = self.state.lock().unwrap();
    let id = Self::allocate_id(&mut state);

    let mut page = json!({
      "id": id.clone(),
      "status": input.status,
      "title": input.title,
      "spaceId": input.space_id,
      "parentId": null,
      "version": { "number": 1, "message": "" },
      "body": {
        "storage": {
          "representation": "storage",
          "value": input.body,
        }
      }
    });
    if let Some(parent_id) = &input.parent_id {
      page["parentId"] = json!(parent_id);
    }

    state.pages.insert(id, page.clone());
    Ok(page)
  }

  async fn get_page(&self, input: &GetPageInput) -> Result<Value> {
    let state = self.state.lock().unwrap();
    let mut page = state
      .pages
      .get(&input.page_id)
      .cloned()
      .ok_or_else(|| anyhow!("No content found with id: {}", input.page_id))?;

    if !input.include_body
      && let Some(obj) = page.as_object_mut()
    {
      obj.remove("body");
    }

    Ok(page)
  }

  async fn update_page(&self, input: &UpdatePageInput) -> Result<Value> {
    let mut state = self.state.lock().unwrap();
    let page = state
      .pages
      .get_mut(&input.page_id)
      .ok_or_else(|| anyhow!("No content found with id: {}", input.page_id))?;

    page["title"] = json!(input.title);
    page["body"]["storage"]["value"] = json!(input.body);
    page["version"] = json!({
      "number": input.version_number + 1,
      "message": input.version_message,
    });

    Ok(page.clone())
  }

  async fn delete_page(&self, page_id: &str, _purge: bool) -> Result<bool> {
    let mut state = self.state.lock().unwrap();
    if state.pages.remove(page_id).is_none() {
      bail!("No content found with id: {page_id}");
    }
    Ok(true)
  }

  async fn list_pages(&self, input: &ListPagesInput) -> Result<Value> {
    let state = self.state.lock().unwrap();
    let mut results: Vec<Value> = state
      .pages
      .values()
      .filter(|page| {
        input
          .space_id
          .as_ref()
          .is_none_or(|space_id| page["spaceId"] == json!(space_id))
      })
      .filter(|page| input.title.as_ref().is_none_or(|title| page["title"] == json!(title)))
      .filter(|page| {
        input
          .status
          .as_ref()
          .is_none_or(|status| page["status"] == json!(status))
      })
      .cloned()
      .collect();

    results.sort_by_key(|page| page["id"].as_str().unwrap_or_default().to_string());
    results.truncate(input.limit as usize);

    Ok(json!({ "results": results, "_links": {} }))
  }

  async fn create_space(&self, input: &CreateSpaceInput) -> Result<Value> {
    let mut state = self.state.lock().unwrap();
    let id = Self::allocate_id(&mut state);
    let key = input.key.clone().unwrap_or_else(|| format!("SP{id}"));

    let space = json!({
      "id": id,
      "key": key.clone(),
      "name": input.name,
      "type": "global",
      "status": "current",
    });
    state.spaces.insert(key, space.clone());
    Ok(space)
  }

  async fn list_spaces(&self, input: &ListSpacesInput) -> Result<Value> {
    let state = self.state.lock().unwrap();
    let mut results: Vec<Value> = state.spaces.values().cloned().collect();
    results.sort_by_key(|space| space["key"].as_str().unwrap_or_default().to_string());
    results.truncate(input.limit as usize);
    Ok(json!({ "results": results, "_links": {} }))
  }

  async fn delete_space(&self, space_key: &str) -> Result<bool> {
    let mut state = self.state.lock().unwrap();
    if state.spaces.remove(space_key).is_none() {
      bail!("No space found with key: {space_key}");
    }
    Ok(true)
  }

  async fn create_comment(&self, input: &CreateCommentInput) -> Result<Value> {
    let mut state = self.state.lock().unwrap();
    if !state.pages.contains_key(&input.page_id) {
      bail!("No content found with id: {}", input.page_id);
    }

    let id = Self::allocate_id(&mut state);
    let comment = json!({
      "id": id.clone(),
      "pageId": input.page_id,
      "status": "current",
      "body": {
        "storage": {
          "representation": "storage",
          "value": input.body,
        }
      }
    });
    state.comments.insert(id, comment.clone());
    Ok(comment)
  }

  async fn delete_comment(&self, comment_id: &str) -> Result<bool> {
    let mut state = self.state.lock().unwrap();
    if state.comments.remove(comment_id).is_none() {
      bail!("No comment found with id: {comment_id}");
    }
    Ok(true)
  }

  async fn add_label(&self, input: &AddLabelInput) -> Result<Value> {
    let mut state = self.state.lock().unwrap();
    if !state.pages.contains_key(&input.page_id) {
      bail!("No content found with id: {}", input.page_id);
    }

    let id = Self::allocate_id(&mut state);
    let label = json!({ "id": id, "name": input.label, "prefix": "global" });
    state
      .labels
      .entry(input.page_id.clone())
      .or_default()
      .push(label.clone());
    Ok(label)
  }

  async fn list_labels(&self, input: &ListLabelsInput) -> Result<Value> {
    let state = self.state.lock().unwrap();
    let mut results = state.labels.get(&input.page_id).cloned().unwrap_or_default();
    results.truncate(input.limit as usize);
    Ok(json!({ "results": results, "_links": {} }))
  }

  async fn remove_label(&self, page_id: &str, label_id: &str) -> Result<bool> {
    let mut state = self.state.lock().unwrap();
    let labels = state
      .labels
      .get_mut(page_id)
      .ok_or_else(|| anyhow!("No content found with id: {page_id}"))?;

    let before = labels.len();
    labels.retain(|label| label["id"] != json!(label_id));
    if labels.len() == before {
      bail!("No label found with id: {label_id}");
    }
    Ok(true)
  }

  async fn delete_attachment(&self, attachment_id: &str, _purge: bool) -> Result<bool> {
    let mut state = self.state.lock().unwrap();
    if state.attachments.remove(attachment_id).is_none() {
      bail!("No attachment found with id: {attachment_id}");
    }
    Ok(true)
  }

  async fn search(&self, _input: &SearchInput) -> Result<Value> {
    let state = self.state.lock().unwrap();
    Ok(
      state
        .search_results
        .clone()
        .unwrap_or_else(|| json!({ "results": [], "start": 0, "size": 0 })),
    )
  }

  async fn validate_auth(&self) -> Result<()> {
    if self.auth_should_succeed {
      Ok(())
    } else {
      bail!("Authentication failed: Invalid email or API token.")
    }
  }
}
