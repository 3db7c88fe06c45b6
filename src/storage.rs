use crate::catalogue::{Catalogue, Item};
use crate::error::LoadError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Directory dataset compiled into the binary
const BUNDLED_ITEMS: &str = include_str!("../data/items.json");

/// Where the catalogue is read from at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueSource {
    /// The dataset shipped with the crate
    Bundled,
    /// A JSON file on disk
    File(PathBuf),
}

impl CatalogueSource {
    pub fn file(path: impl AsRef<Path>) -> Self {
        CatalogueSource::File(path.as_ref().to_path_buf())
    }

    /// Read, parse, and validate every record, then build the catalogue
    ///
    /// # Returns
    /// The loaded catalogue, or the first problem found in the source
    #[instrument(skip(self), fields(source = %self))]
    pub fn load(&self) -> Result<Catalogue, LoadError> {
        let items = match self {
            CatalogueSource::Bundled => parse_items(BUNDLED_ITEMS)?,
            CatalogueSource::File(path) => {
                let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_items(&content)?
            }
        };

        info!(items = items.len(), "Loaded catalogue");
        Ok(Catalogue::from_items(items))
    }
}

impl fmt::Display for CatalogueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogueSource::Bundled => f.write_str("bundled"),
            CatalogueSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse a JSON array of item records
///
/// Shape errors (missing fields, wrong types, unknown item type, bad dates)
/// come from deserialization; the remaining checks run per record.
pub fn parse_items(content: &str) -> Result<Vec<Item>, LoadError> {
    let items: Vec<Item> = serde_json::from_str(content)?;
    for (index, item) in items.iter().enumerate() {
        validate_item(item).map_err(|reason| LoadError::InvalidItem { index, reason })?;
    }
    Ok(items)
}

fn validate_item(item: &Item) -> Result<(), String> {
    if item.id.trim().is_empty() {
        return Err("id must not be empty".to_string());
    }
    if item.id.trim() != item.id {
        return Err(format!(
            "id '{}' must not have leading or trailing whitespace",
            item.id
        ));
    }
    if item.title.trim().is_empty() {
        return Err(format!("item '{}' has an empty title", item.id));
    }
    // selection values are trimmed, so a padded value could never be selected
    check_filter_value(&item.id, "location", &item.location)?;
    for tag in &item.tags {
        check_filter_value(&item.id, "tag", tag)?;
    }
    Ok(())
}

fn check_filter_value(id: &str, field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("item '{}' has an empty {}", id, field));
    }
    if value.trim() != value {
        return Err(format!(
            "item '{}' has {} '{}' with leading or trailing whitespace",
            id, field, value
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TWO_ITEMS: &str = r#"[
        {"id": "e1", "title": "Meetup", "type": "event", "location": "Inverness",
         "date": "2025-03-15", "tags": ["vr"], "description": "d"},
        {"id": "b1", "title": "Studio", "type": "business", "location": "Skye",
         "date": null, "tags": [], "description": "d", "url": null}
    ]"#;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_bundled_catalogue_loads() {
        let catalogue = CatalogueSource::Bundled.load().unwrap();
        assert!(!catalogue.is_empty());

        let ids: HashSet<&str> = catalogue.get_items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), catalogue.len());
        assert!(catalogue.get_items().iter().any(|i| i.is_event()));
        assert!(catalogue.get_items().iter().any(|i| i.is_business()));
    }

    #[test]
    fn test_load_from_file() {
        let file = write_temp(TWO_ITEMS);
        let catalogue = CatalogueSource::file(file.path()).load().unwrap();
        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.get_item_by_id("b1").unwrap().location, "Skye");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = CatalogueSource::file(dir.path().join("missing.json"));
        assert!(matches!(source.load(), Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_empty_array_is_empty_catalogue() {
        assert!(parse_items("[]").unwrap().is_empty());
    }

    #[test]
    fn test_missing_tags_is_parse_error() {
        let json = r#"[{"id": "e1", "title": "t", "type": "event", "location": "x", "description": "d"}]"#;
        assert!(matches!(parse_items(json), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_unknown_type_is_parse_error() {
        let json = r#"[{"id": "v1", "title": "t", "type": "venue", "location": "x", "tags": [], "description": "d"}]"#;
        assert!(matches!(parse_items(json), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_bad_date_is_parse_error() {
        let json = r#"[{"id": "e1", "title": "t", "type": "event", "location": "x", "date": "next friday", "tags": [], "description": "d"}]"#;
        assert!(matches!(parse_items(json), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_non_array_is_parse_error() {
        assert!(matches!(parse_items(r#"{"items": []}"#), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_empty_id_reports_index() {
        let json = r#"[
            {"id": "ok", "title": "t", "type": "event", "location": "x", "tags": [], "description": "d"},
            {"id": "  ", "title": "t", "type": "event", "location": "x", "tags": [], "description": "d"}
        ]"#;
        match parse_items(json) {
            Err(LoadError::InvalidItem { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidItem, got {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn test_padded_id_is_rejected() {
        let json = r#"[{"id": " e1", "title": "t", "type": "event", "location": "x", "tags": [], "description": "d"}]"#;
        assert!(matches!(
            parse_items(json),
            Err(LoadError::InvalidItem { index: 0, .. })
        ));
    }

    #[test]
    fn test_padded_tag_is_rejected() {
        let json = r#"[
            {"id": "e1", "title": "t", "type": "event", "location": "x", "tags": ["vr"], "description": "d"},
            {"id": "e2", "title": "t", "type": "event", "location": "x", "tags": ["ar", "vr "], "description": "d"}
        ]"#;
        assert!(matches!(
            parse_items(json),
            Err(LoadError::InvalidItem { index: 1, .. })
        ));
    }

    #[test]
    fn test_blank_tag_is_rejected() {
        let json = r#"[{"id": "e1", "title": "t", "type": "event", "location": "x", "tags": [" "], "description": "d"}]"#;
        assert!(matches!(
            parse_items(json),
            Err(LoadError::InvalidItem { index: 0, .. })
        ));
    }

    #[test]
    fn test_padded_or_blank_location_is_rejected() {
        for location in [" Inverness", "Inverness ", ""] {
            let json = format!(
                r#"[{{"id": "e1", "title": "t", "type": "event", "location": "{}", "tags": [], "description": "d"}}]"#,
                location
            );
            assert!(matches!(
                parse_items(&json),
                Err(LoadError::InvalidItem { index: 0, .. })
            ));
        }
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let json = r#"[{"id": "e1", "title": "", "type": "event", "location": "x", "tags": [], "description": "d"}]"#;
        assert!(matches!(
            parse_items(json),
            Err(LoadError::InvalidItem { index: 0, .. })
        ));
    }
}
