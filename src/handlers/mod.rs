//! MCP tool handlers for the directory server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod filter_options;
pub mod get_item;
pub mod list;
