use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of directory entry
///
/// Uses lowercase naming to match the JSON data format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    /// A dated happening (meetup, workshop, showcase)
    event,
    /// A studio, venue, or organisation
    business,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::event => "event",
            ItemType::business => "business",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "event" => Ok(ItemType::event),
            "business" => Ok(ItemType::business),
            _ => Err(format!(
                "Invalid item type '{}'. Valid options are: event, business",
                s
            )),
        }
    }
}

/// A single directory entry
///
/// Items are loaded once from the catalogue source and never modified.
/// Optional fields may be `null` or missing in the JSON source; every other
/// field is required and a record without it fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, also used as the detail view key (e.g., "inverness-xr-meetup")
    pub id: String,
    /// Display name
    pub title: String,
    /// Event or business
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Free-text place name, matched by equality only
    pub location: String,
    /// Optional calendar date, usually present for events only
    #[serde(
        default,
        deserialize_with = "crate::catalogue::serde_impl::deserialize_item_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<NaiveDate>,
    /// Topical labels, kept in source order
    pub tags: Vec<String>,
    /// Short display text
    pub description: String,
    /// Longer overview text for the detail view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Optional image reference; carried, not rendered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// External website
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Item {
    /// Overview text, falling back to the short description when no long one is set
    pub fn long_description(&self) -> &str {
        self.long_description
            .as_deref()
            .unwrap_or(&self.description)
    }

    pub fn is_event(&self) -> bool {
        self.item_type == ItemType::event
    }

    pub fn is_business(&self) -> bool {
        self.item_type == ItemType::business
    }

    /// Check whether `tag` is one of the item's tags (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
