use crate::catalogue::Item;

/// Sentinel meaning "no constraint" for a filter dimension
pub const ALL: &str = "all";

/// The chosen tag and location for one listing view
///
/// Both values default to [`ALL`]. A selection is plain data; it is owned by
/// the view that renders it and never written back to the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub tag: String,
    pub location: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self::all()
    }
}

impl Selection {
    /// Selection with no constraints
    pub fn all() -> Self {
        Self {
            tag: ALL.to_string(),
            location: ALL.to_string(),
        }
    }

    pub fn new(tag: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            location: location.into(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Return both dimensions to [`ALL`]
    pub fn reset(&mut self) {
        *self = Self::all();
    }

    pub fn is_all(&self) -> bool {
        self.tag == ALL && self.location == ALL
    }

    /// Conjunctive match: the tag rule and the location rule must both hold
    pub fn matches(&self, item: &Item) -> bool {
        let tag_match = self.tag == ALL || item.has_tag(&self.tag);
        let location_match = self.location == ALL || item.location == self.location;
        tag_match && location_match
    }
}
