use super::selection::Selection;
use crate::catalogue::{Item, item_locations, item_tags};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Apply a tag/location selection to `items`
///
/// # Arguments
/// * `items` - Candidate items, in display order
/// * `selected_tag` - A tag, or `"all"`
/// * `selected_location` - A location, or `"all"`
///
/// # Returns
/// The matching items in their original relative order. An empty result is a
/// normal outcome for selections nothing satisfies.
pub fn filter_items<'a, I>(items: I, selected_tag: &str, selected_location: &str) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    let selection = Selection::new(selected_tag, selected_location);
    apply_selection(items, &selection)
}

/// Same as [`filter_items`], taking the selection as one value
pub fn apply_selection<'a, I>(items: I, selection: &Selection) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    items
        .into_iter()
        .filter(|item| selection.matches(item))
        .collect()
}

/// Filter vocabularies offered to the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub tags: Vec<String>,
    pub locations: Vec<String>,
}

impl FilterOptions {
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.locations.is_empty()
    }
}

/// Derive the distinct, sorted tags and locations of `items`
pub fn derive_options<'a, I>(items: I) -> FilterOptions
where
    I: IntoIterator<Item = &'a Item>,
    I::IntoIter: Clone,
{
    let items = items.into_iter();
    FilterOptions {
        tags: item_tags(items.clone()),
        locations: item_locations(items),
    }
}

/// Which item set filter options are derived from
///
/// Options always come from a pre-filter set, never from the filtered result,
/// so narrowing one dimension does not hide choices in the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionsScope {
    /// The page's own candidate set (home slice, events, businesses)
    #[default]
    Page,
    /// The whole catalogue, regardless of page
    Catalogue,
}

impl fmt::Display for OptionsScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsScope::Page => f.write_str("page"),
            OptionsScope::Catalogue => f.write_str("catalogue"),
        }
    }
}

impl FromStr for OptionsScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page" => Ok(OptionsScope::Page),
            "catalogue" => Ok(OptionsScope::Catalogue),
            _ => Err(format!(
                "Invalid options scope '{}'. Valid options are: page, catalogue",
                s
            )),
        }
    }
}
