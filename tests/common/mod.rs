//! Common test utilities for integration tests
#![allow(dead_code)]

use highlandxr_mcp::{CatalogueSource, DirectoryServerHandler, ListingSettings};
use std::io::Write;
use tempfile::NamedTempFile;

/// Three-item directory: two events and a business, two locations
pub const SCENARIO_ITEMS: &str = r#"[
    {"id": "e1", "title": "Inverness VR Meetup", "type": "event", "location": "Inverness",
     "date": "2025-03-15", "tags": ["vr", "meetup"], "description": "Monthly meetup",
     "longDescription": "Talks and open headsets", "url": "https://example.com/e1"},
    {"id": "b1", "title": "Glen Studio", "type": "business", "location": "Inverness",
     "date": null, "tags": ["studio"], "description": "Capture studio"},
    {"id": "e2", "title": "Aviemore VR Walk", "type": "event", "location": "Aviemore",
     "date": "2025-04-02", "tags": ["vr"], "description": "Headset walk in the forest"}
]"#;

/// Write `content` to a temporary JSON file
pub fn write_catalogue(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Create a test handler over the scenario items with default settings
pub fn get_test_handler() -> (DirectoryServerHandler, NamedTempFile) {
    get_test_handler_with(ListingSettings::default())
}

pub fn get_test_handler_with(settings: ListingSettings) -> (DirectoryServerHandler, NamedTempFile) {
    let file = write_catalogue(SCENARIO_ITEMS);
    let handler = DirectoryServerHandler::new(&CatalogueSource::file(file.path()), settings).unwrap();
    (handler, file)
}

/// Create a handler over the dataset shipped with the crate
pub fn get_bundled_handler() -> DirectoryServerHandler {
    DirectoryServerHandler::new(&CatalogueSource::Bundled, ListingSettings::default()).unwrap()
}

/// Extract listing IDs from list() output, in display order
/// Card format: "- [<id>] <title> (<type>, <location>)"
pub fn extract_ids(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.strip_prefix("- ["))
        .filter_map(|rest| rest.split_once(']'))
        .map(|(id, _)| id.to_string())
        .collect()
}
