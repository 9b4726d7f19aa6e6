//! Test fixtures for Confluence API responses
//!
//! Realistic sample documents shaped like the v2 REST API responses,
//! used to seed the fake client.

use serde_json::{Value, json};

/// A simple published page with a storage-format body.
pub fn sample_page_response() -> Value {
  json!({
    "id": "123456",
    "status": "current",
    "title": "Getting Started Guide",
    "spaceId": "900001",
    "parentId": null,
    "version": { "number": 3, "message": "", "createdAt": "2025-11-02T09:14:00.000Z" },
    "body": {
      "storage": {
        "representation": "storage",
        "value": "<h1>Getting Started</h1><p>Welcome to our documentation.</p>"
      }
    },
    "_links": { "webui": "/spaces/DOCS/pages/123456" }
  })
}

/// A child page living under the getting started guide.
pub fn sample_child_page_response() -> Value {
  json!({
    "id": "123457",
    "status": "current",
    "title": "Installation",
    "spaceId": "900001",
    "parentId": "123456",
    "version": { "number": 1, "message": "", "createdAt": "2025-11-03T10:00:00.000Z" },
    "body": {
      "storage": {
        "representation": "storage",
        "value": "<p>Run the installer.</p>"
      }
    },
    "_links": { "webui": "/spaces/DOCS/pages/123457" }
  })
}

/// A draft page in a different space.
pub fn sample_draft_page_response() -> Value {
  json!({
    "id": "223344",
    "status": "draft",
    "title": "Roadmap Notes",
    "spaceId": "900002",
    "parentId": null,
    "version": { "number": 1, "message": "", "createdAt": "2025-12-01T16:40:00.000Z" },
    "body": {
      "storage": {
        "representation": "storage",
        "value": "<p>Q1 planning.</p>"
      }
    },
    "_links": { "webui": "/spaces/ENG/pages/223344" }
  })
}

/// A global space record.
pub fn sample_space_response() -> Value {
  json!({
    "id": "900001",
    "key": "DOCS",
    "name": "Documentation",
    "type": "global",
    "status": "current",
    "_links": { "webui": "/spaces/DOCS" }
  })
}

/// A label as returned by the page labels endpoint.
pub fn sample_label_response() -> Value {
  json!({
    "id": "55001",
    "name": "reviewed",
    "prefix": "global"
  })
}

/// A CQL search result set with one page hit.
pub fn sample_search_results() -> Value {
  json!({
    "results": [
      {
        "content": {
          "id": "123456",
          "type": "page",
          "status": "current",
          "title": "Getting Started Guide"
        },
        "excerpt": "Welcome to our documentation.",
        "url": "/spaces/DOCS/pages/123456"
      }
    ],
    "start": 0,
    "limit": 25,
    "size": 1
  })
}
