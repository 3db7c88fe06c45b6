//! Formatting helper functions for the directory MCP server
//!
//! This module renders listings, item details, and filter options as plain
//! text for MCP clients.

use crate::catalogue::Item;
use crate::listing::{ALL, ListingView, OptionsScope};
use chrono::NaiveDate;

/// Number of tags shown on a listing card
const CARD_TAG_LIMIT: usize = 2;

/// Short date used on listing cards (e.g., "15/03/2025")
pub fn format_card_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Long date used on detail views (e.g., "15 March 2025")
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Format a listing view into a display string
///
/// # Arguments
/// * `view` - The view with its selection already applied
/// * `visible` - `view.visible()`, computed once by the caller
///
/// # Returns
/// A header describing the page and selection, followed by one card per
/// visible item, or the page's empty state when nothing matches
pub fn format_listing(view: &ListingView<'_>, visible: &[&Item]) -> String {
    let page = view.page();
    let selection = view.selection();

    let mut result = format!("{} ({} page)\n{}\n", page.title(), page.name(), page.description());
    result.push_str(&format!(
        "Filters: tag={}, location={}\n\n",
        selection.tag, selection.location
    ));

    if visible.is_empty() {
        result.push_str(&format!(
            "{}\n{}\n",
            page.empty_title(),
            page.empty_description()
        ));
        return result;
    }

    result.push_str(&format!(
        "Showing {} of {} listing(s):\n\n",
        visible.len(),
        view.candidates().len()
    ));
    for &item in visible {
        result.push_str(&format_item_card(item));
    }

    result
}

/// Format one item as a listing card
pub fn format_item_card(item: &Item) -> String {
    let mut card = format!(
        "- [{}] {} ({}, {})\n",
        item.id, item.title, item.item_type, item.location
    );

    if !item.tags.is_empty() {
        let shown: Vec<&str> = item
            .tags
            .iter()
            .take(CARD_TAG_LIMIT)
            .map(String::as_str)
            .collect();
        card.push_str(&format!("  Tags: {}\n", shown.join(", ")));
    }
    card.push_str(&format!("  {}\n", item.description));
    if let Some(date) = item.date {
        card.push_str(&format!("  Date: {}\n", format_card_date(date)));
    }
    if let Some(ref url) = item.url {
        card.push_str(&format!("  Website: {}\n", url));
    }

    card
}

/// Format the full detail view of an item
pub fn format_item_detail(item: &Item) -> String {
    let mut detail = format!("{}\n", item.title);
    detail.push_str(&format!("ID: {}\n", item.id));
    detail.push_str(&format!("Type: {}\n", item.item_type));
    detail.push_str(&format!("Location: {}\n", item.location));
    if !item.tags.is_empty() {
        detail.push_str(&format!("Tags: {}\n", item.tags.join(", ")));
    }
    if let Some(date) = item.date {
        detail.push_str(&format!("Date: {}\n", format_long_date(date)));
    }
    detail.push_str(&format!("\n{}\n", item.description));
    detail.push_str(&format!("\nOverview:\n{}\n", item.long_description()));
    if let Some(ref url) = item.url {
        detail.push_str(&format!("\nWebsite: {}\n", url));
    }

    detail
}

pub fn format_item_not_found(id: &str) -> String {
    format!(
        "Item '{}' not found. It may have been removed from the directory.",
        id
    )
}

/// Format the tag and location choices of a view
///
/// # Arguments
/// * `view` - The view whose options are listed
/// * `scope` - Where the options were derived from, shown in the header
pub fn format_filter_options(view: &ListingView<'_>, scope: OptionsScope) -> String {
    let options = view.options();
    let mut result = format!(
        "Filter options for {} (scope: {}):\n\nTags:\n- {} (All tags)\n",
        view.page(),
        scope,
        ALL
    );
    for tag in &options.tags {
        result.push_str(&format!("- {}\n", tag));
    }

    result.push_str(&format!("\nLocations:\n- {} (All locations)\n", ALL));
    for location in &options.locations {
        result.push_str(&format!("- {}\n", location));
    }

    result
}
