//! Confluence operations library
//!
//! This library backs the `confluence-ops` CLI: stdin-JSON driven
//! Confluence REST API operations sharing one configured client.

pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod confluence;
pub mod env_file;
pub mod input;
