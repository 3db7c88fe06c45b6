//! Validation helper functions for the directory MCP server
//!
//! This module turns raw tool parameters into listing pages, selection values,
//! and item IDs.

use crate::listing::{ALL, ListingPage};
use mcp_attr::Result as McpResult;

/// Parse and validate the page parameter
///
/// # Arguments
/// * `page` - Page name; `None` or blank selects the home page
///
/// # Returns
/// Result containing the parsed ListingPage or an invalid-params error
pub fn parse_page(page: Option<&str>) -> McpResult<ListingPage> {
    match page.map(str::trim) {
        None | Some("") => Ok(ListingPage::Home),
        Some(name) => name.parse::<ListingPage>().map_err(|message| {
            mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
        }),
    }
}

/// Normalize a tag or location parameter into a selection value
///
/// `None` and blank strings mean "no constraint". Anything else is trimmed
/// and matched exactly, so an unknown value simply selects nothing.
pub fn normalize_selection_value(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => ALL.to_string(),
    }
}

/// Normalize an item ID by trimming surrounding whitespace
pub fn normalize_item_id(id: &str) -> String {
    id.trim().to_string()
}
