//! HTTP client implementation for talking to the Confluence REST API.
//!
//! [`ConfluenceClient`] centralizes authentication, base-URL
//! construction, and the GET/POST/PUT/DELETE verb helpers shared by
//! every operation. Most operations use the v2 API; a few (space
//! deletion, the auth probe) only exist in v1.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::{Value, json};

use super::api::ConfluenceApi;
use super::models::{
  AddLabelInput, CreateCommentInput, CreatePageInput, CreateSpaceInput, GetPageInput, ListLabelsInput,
  ListPagesInput, ListSpacesInput, SearchInput, UpdatePageInput,
};
use crate::config::{AuthScheme, Config};

/// Which generation of the Confluence REST API a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
  /// `{base}/rest/api` - needed for space deletion and the auth probe.
  V1,
  /// `{base}/api/v2` - default for everything else.
  V2,
}

/// Confluence API client.
#[derive(Clone)]
pub struct ConfluenceClient {
  base_url: String,
  auth: AuthScheme,
  client: reqwest::Client,
}

impl ConfluenceClient {
  /// Create a client from a resolved configuration.
  ///
  /// # Errors
  /// Returns an error if the underlying `reqwest::Client` cannot be
  /// built.
  pub fn new(config: Config) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(config.timeout)
      .user_agent(format!(
        "confluence-ops/{} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("TARGET")
      ))
      .build()
      .context("Failed to create HTTP client")?;

    Ok(Self {
      base_url: config.base_url,
      auth: config.auth,
      client,
    })
  }

  /// Build the full URL for an endpoint path under the given API
  /// version.
  fn endpoint(&self, version: ApiVersion, path: &str) -> String {
    match version {
      ApiVersion::V1 => format!("{}/rest/api/{}", self.base_url, path),
      ApiVersion::V2 => format!("{}/api/v2/{}", self.base_url, path),
    }
  }

  /// Get the authorization header value for the configured scheme.
  fn auth_header(&self) -> String {
    match &self.auth {
      AuthScheme::Pat(pat) => format!("Bearer {pat}"),
      AuthScheme::Basic { email, token } => {
        let credentials = format!("{email}:{token}");
        format!("Basic {}", BASE64.encode(credentials.as_bytes()))
      }
    }
  }

  /// Send a GET request and parse the JSON response.
  async fn get(&self, version: ApiVersion, path: &str, params: &[(&str, String)]) -> Result<Value> {
    let url = self.endpoint(version, path);
    tracing::debug!(%url, "GET");

    let response = self
      .client
      .get(&url)
      .header("Authorization", self.auth_header())
      .header("Accept", "application/json")
      .query(params)
      .send()
      .await
      .context("Failed to send request to Confluence API")?;

    Self::json_body(response).await
  }

  /// Send a POST request with a JSON body and parse the response.
  async fn post(&self, version: ApiVersion, path: &str, body: &Value) -> Result<Value> {
    let url = self.endpoint(version, path);
    tracing::debug!(%url, "POST");

    let response = self
      .client
      .post(&url)
      .header("Authorization", self.auth_header())
      .header("Accept", "application/json")
      .json(body)
      .send()
      .await
      .context("Failed to send request to Confluence API")?;

    Self::json_body(response).await
  }

  /// Send a PUT request with a JSON body and parse the response.
  async fn put(&self, version: ApiVersion, path: &str, body: &Value) -> Result<Value> {
    let url = self.endpoint(version, path);
    tracing::debug!(%url, "PUT");

    let response = self
      .client
      .put(&url)
      .header("Authorization", self.auth_header())
      .header("Accept", "application/json")
      .json(body)
      .send()
      .await
      .context("Failed to send request to Confluence API")?;

    Self::json_body(response).await
  }

  /// Send a DELETE request.
  ///
  /// # Returns
  /// `true` when the deletion was acknowledged with a success status
  /// for the targeted API version (see [`delete_success`]).
  async fn delete(&self, version: ApiVersion, path: &str, params: &[(&str, String)]) -> Result<bool> {
    let url = self.endpoint(version, path);
    tracing::debug!(%url, "DELETE");

    let response = self
      .client
      .delete(&url)
      .header("Authorization", self.auth_header())
      .header("Accept", "application/json")
      .query(params)
      .send()
      .await
      .context("Failed to send request to Confluence API")?;

    let status = response.status();
    if !status.is_success() {
      let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| String::from("(no error details)"));
      return Err(anyhow!("Confluence API returned error {status}: {error_text}"));
    }

    Ok(delete_success(version, status.as_u16()))
  }

  /// Check the response status and parse the body as JSON.
  async fn json_body(response: reqwest::Response) -> Result<Value> {
    if !response.status().is_success() {
      let status = response.status();
      let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| String::from("(no error details)"));
      return Err(anyhow!("Confluence API returned error {status}: {error_text}"));
    }

    response
      .json()
      .await
      .context("Failed to parse JSON response from Confluence API")
  }
}

/// Statuses that count as a completed deletion. Space deletion on the
/// v1 API responds 202 because it completes asynchronously; v2 deletes
/// finish synchronously with 200 or 204.
fn delete_success(version: ApiVersion, status: u16) -> bool {
  match version {
    ApiVersion::V1 => matches!(status, 200 | 202 | 204),
    ApiVersion::V2 => matches!(status, 200 | 204),
  }
}

/// Build the request body for page creation.
fn create_page_payload(input: &CreatePageInput) -> Value {
  let mut payload = json!({
    "spaceId": input.space_id,
    "title": input.title,
    "body": {
      "representation": "storage",
      "value": input.body,
    },
    "status": input.status,
  });

  if let Some(parent_id) = &input.parent_id {
    payload["parentId"] = json!(parent_id);
  }

  payload
}

/// Build the request body for a page update. The sent version is the
/// caller's `version_number` plus one.
fn update_page_payload(input: &UpdatePageInput) -> Value {
  json!({
    "id": input.page_id,
    "title": input.title,
    "body": {
      "representation": "storage",
      "value": input.body,
    },
    "version": {
      "number": input.version_number + 1,
      "message": input.version_message,
    },
    "status": "current",
  })
}

/// Build the request body for space creation.
fn create_space_payload(input: &CreateSpaceInput) -> Value {
  let mut payload = json!({ "name": input.name });

  if let Some(key) = &input.key {
    payload["key"] = json!(key);
  }

  if let Some(description) = &input.description {
    payload["description"] = json!({
      "plain": {
        "value": description,
        "representation": "plain",
      }
    });
  }

  if let Some(alias) = &input.alias {
    payload["alias"] = json!(alias);
  }

  if input.create_private_space {
    // Granting administer to the current user only makes the space
    // private.
    payload["permissions"] = json!([
      {
        "principal": { "type": "user", "id": "current" },
        "operation": { "key": "administer", "targetType": "space" },
      }
    ]);
  }

  payload
}

/// Wrap raw storage-format markup the way the body fields expect.
fn storage_body(value: &str) -> Value {
  json!({
    "body": {
      "representation": "storage",
      "value": value,
    }
  })
}

#[async_trait]
impl ConfluenceApi for ConfluenceClient {
  async fn create_page(&self, input: &CreatePageInput) -> Result<Value> {
    self.post(ApiVersion::V2, "pages", &create_page_payload(input)).await
  }

  async fn get_page(&self, input: &GetPageInput) -> Result<Value> {
    let mut params = Vec::new();
    if input.include_body {
      params.push(("body-format", input.body_format.clone()));
    }
    self
      .get(ApiVersion::V2, &format!("pages/{}", input.page_id), &params)
      .await
  }

  async fn update_page(&self, input: &UpdatePageInput) -> Result<Value> {
    self
      .put(
        ApiVersion::V2,
        &format!("pages/{}", input.page_id),
        &update_page_payload(input),
      )
      .await
  }

  async fn delete_page(&self, page_id: &str, purge: bool) -> Result<bool> {
    let mut params = Vec::new();
    if purge {
      params.push(("purge", "true".to_string()));
    }
    self
      .delete(ApiVersion::V2, &format!("pages/{page_id}"), &params)
      .await
  }

  async fn list_pages(&self, input: &ListPagesInput) -> Result<Value> {
    let mut params = Vec::new();
    if let Some(space_id) = &input.space_id {
      params.push(("space-id", space_id.clone()));
    }
    if let Some(title) = &input.title {
      params.push(("title", title.clone()));
    }
    if let Some(status) = &input.status {
      params.push(("status", status.clone()));
    }
    params.push(("limit", input.limit.to_string()));
    if let Some(cursor) = &input.cursor {
      params.push(("cursor", cursor.clone()));
    }
    self.get(ApiVersion::V2, "pages", &params).await
  }

  async fn create_space(&self, input: &CreateSpaceInput) -> Result<Value> {
    self.post(ApiVersion::V2, "spaces", &create_space_payload(input)).await
  }

  async fn list_spaces(&self, input: &ListSpacesInput) -> Result<Value> {
    let mut params = vec![("limit", input.limit.to_string())];
    if let Some(cursor) = &input.cursor {
      params.push(("cursor", cursor.clone()));
    }
    self.get(ApiVersion::V2, "spaces", &params).await
  }

  async fn delete_space(&self, space_key: &str) -> Result<bool> {
    // Space deletion never made it into the v2 API.
    self.delete(ApiVersion::V1, &format!("space/{space_key}"), &[]).await
  }

  async fn create_comment(&self, input: &CreateCommentInput) -> Result<Value> {
    self
      .post(
        ApiVersion::V2,
        &format!("pages/{}/footer-comments", input.page_id),
        &storage_body(&input.body),
      )
      .await
  }

  async fn delete_comment(&self, comment_id: &str) -> Result<bool> {
    self
      .delete(ApiVersion::V2, &format!("footer-comments/{comment_id}"), &[])
      .await
  }

  async fn add_label(&self, input: &AddLabelInput) -> Result<Value> {
    // The endpoint takes a single label object, not a list.
    self
      .post(
        ApiVersion::V2,
        &format!("pages/{}/labels", input.page_id),
        &json!({ "name": input.label }),
      )
      .await
  }

  async fn list_labels(&self, input: &ListLabelsInput) -> Result<Value> {
    let mut params = vec![("limit", input.limit.to_string())];
    if let Some(cursor) = &input.cursor {
      params.push(("cursor", cursor.clone()));
    }
    self
      .get(ApiVersion::V2, &format!("pages/{}/labels", input.page_id), &params)
      .await
  }

  async fn remove_label(&self, page_id: &str, label_id: &str) -> Result<bool> {
    self
      .delete(ApiVersion::V2, &format!("pages/{page_id}/labels/{label_id}"), &[])
      .await
  }

  async fn delete_attachment(&self, attachment_id: &str, purge: bool) -> Result<bool> {
    let mut params = Vec::new();
    if purge {
      params.push(("purge", "true".to_string()));
    }
    self
      .delete(ApiVersion::V2, &format!("attachments/{attachment_id}"), &params)
      .await
  }

  async fn search(&self, input: &SearchInput) -> Result<Value> {
    let mut params = vec![("cql", input.query.clone()), ("limit", input.limit.to_string())];
    if let Some(cursor) = &input.cursor {
      params.push(("cursor", cursor.clone()));
    }
    self.get(ApiVersion::V2, "content/search", &params).await
  }

  async fn validate_auth(&self) -> Result<()> {
    let url = self.endpoint(ApiVersion::V1, "space");
    tracing::debug!(%url, "auth probe");

    let response = self
      .client
      .get(&url)
      .header("Authorization", self.auth_header())
      .header("Accept", "application/json")
      .query(&[("limit", "1")])
      .send()
      .await
      .map_err(|e| self.classify_probe_error(e))?;

    let status = response.status();
    if status.is_success() {
      return Ok(());
    }

    let error_text = response
      .text()
      .await
      .unwrap_or_else(|_| String::from("(no error details)"));

    match status.as_u16() {
      401 => match &self.auth {
        AuthScheme::Pat(_) => Err(anyhow!(
          "Authentication failed: Invalid or expired Personal Access Token.\n\
           Please verify your CONFLUENCE_PAT is correct and has not expired.\n\
           You can generate a new token at: Settings > Personal Access Tokens in Confluence."
        )),
        AuthScheme::Basic { .. } => Err(anyhow!(
          "Authentication failed: Invalid email or API token.\n\
           Please verify:\n  \
           - CONFLUENCE_EMAIL is your Atlassian account email\n  \
           - CONFLUENCE_API_TOKEN is a valid API token\n\
           You can generate a new token at: https://id.atlassian.com/manage-profile/security/api-tokens"
        )),
      },
      403 => Err(anyhow!(
        "Authentication failed: Access forbidden.\n\
         Your credentials are valid but you don't have permission to access Confluence.\n\
         Please contact your Confluence administrator."
      )),
      _ => Err(anyhow!(
        "Authentication validation failed with status {status}.\n\
         Please verify your Confluence URL and credentials.\n\
         Error: {error_text}"
      )),
    }
  }
}

impl ConfluenceClient {
  /// Turn transport-level probe failures into actionable messages.
  fn classify_probe_error(&self, err: reqwest::Error) -> anyhow::Error {
    if err.is_timeout() {
      anyhow!(
        "Connection to Confluence at {} timed out.\n\
         The server may be slow or unresponsive. Please try again later.",
        self.base_url
      )
    } else if err.is_connect() {
      anyhow!(
        "Could not connect to Confluence at {}.\n\
         Please verify CONFLUENCE_URL is correct and the server is reachable.",
        self.base_url
      )
    } else {
      anyhow!("Authentication validation failed: {err}")
    }
  }
}
