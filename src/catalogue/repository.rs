use super::item::Item;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::warn;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// The full, immutable set of directory items
pub struct Catalogue {
    /// Items in source order
    items: Vec<Item>,

    /// ID → position in `items`
    ///
    /// Built once at construction. When the source repeats an ID the first
    /// occurrence is indexed, so lookups stay unambiguous.
    id_index: HashMap<String, usize>,
}

impl Catalogue {
    /// Build a catalogue from already-validated items
    ///
    /// # Arguments
    /// * `items` - Items in source order
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut id_index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if id_index.contains_key(&item.id) {
                warn!(id = %item.id, position = pos, "Duplicate item ID; keeping first occurrence");
                continue;
            }
            id_index.insert(item.id.clone(), pos);
        }
        Self { items, id_index }
    }

    /// All items in source order
    pub fn get_items(&self) -> &[Item] {
        &self.items
    }

    /// Find an item by its ID
    ///
    /// # Arguments
    /// * `id` - Exact item ID
    ///
    /// # Returns
    /// The item, or `None` when no item has this ID
    pub fn get_item_by_id(&self, id: &str) -> Option<&Item> {
        self.id_index.get(id).map(|&pos| &self.items[pos])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct tags across the whole catalogue
    pub fn tags(&self) -> Vec<String> {
        item_tags(&self.items)
    }

    /// Distinct locations across the whole catalogue
    pub fn locations(&self) -> Vec<String> {
        item_locations(&self.items)
    }
}

/// Collect the distinct tags of `items`, sorted with [`collate`]
pub fn item_tags<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Item>,
{
    sorted_distinct(
        items
            .into_iter()
            .flat_map(|item| item.tags.iter().map(String::as_str)),
    )
}

/// Collect the distinct locations of `items`, sorted with [`collate`]
pub fn item_locations<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Item>,
{
    sorted_distinct(items.into_iter().map(|item| item.location.as_str()))
}

/// Locale-aware ordering for display vocabularies
///
/// Levels, in order: base letters (accents and case removed), accents, then
/// case with lowercase first. Code-point order breaks any remaining tie so the
/// ordering is total. "Àird" sorts before "Baile", "banana" before "Banana".
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| case_marks(a).cmp(case_marks(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(value: &str) -> impl Iterator<Item = char> + '_ {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented_letters(value: &str) -> impl Iterator<Item = char> + '_ {
    value.nfd().flat_map(char::to_lowercase)
}

/// `false` for lowercase, `true` for uppercase, per base letter
fn case_marks(value: &str) -> impl Iterator<Item = bool> + '_ {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}

fn sorted_distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut values: Vec<&str> = values.collect();
    values.sort_by(|a, b| collate(a, b));
    // equal strings are adjacent because collate only ties on equality
    values.dedup();
    values.into_iter().map(str::to_string).collect()
}
