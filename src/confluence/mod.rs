//! Confluence module providing the API trait, the HTTP client, and the
//! typed operation inputs and outcomes.

pub mod api;
pub mod client;
pub mod models;

pub use api::ConfluenceApi;
pub use client::{ApiVersion, ConfluenceClient};
#[allow(unused_imports)]
pub use models::{
  AddLabelInput, CreateCommentInput, CreatePageInput, CreateSpaceInput, DeleteAttachmentInput,
  DeleteAttachmentOutcome, DeleteCommentInput, DeleteCommentOutcome, DeletePageInput, DeletePageOutcome,
  DeleteSpaceInput, DeleteSpaceOutcome, GetPageInput, ListLabelsInput, ListPagesInput, ListSpacesInput,
  RemoveLabelInput, RemoveLabelOutcome, SearchInput, UpdatePageInput,
};
