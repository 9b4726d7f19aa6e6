//! confluence-ops - Perform Confluence REST API operations from stdin JSON
//!
//! This is the main entry point for the CLI application.

mod cli;
mod color;
mod commands;
mod config;
mod confluence;
mod env_file;
mod input;

#[tokio::main]
async fn main() {
  cli::run().await;
}
