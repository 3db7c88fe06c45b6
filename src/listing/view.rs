use super::filter::{FilterOptions, OptionsScope, apply_selection, derive_options};
use super::page::ListingPage;
use super::selection::Selection;
use crate::catalogue::{Catalogue, Item};
use crate::config::ListingSettings;

/// One rendered listing: a page's candidates plus the selection applied to them
///
/// The view owns its selection; the candidates and the offered options are
/// fixed when the view is opened.
#[derive(Debug, Clone)]
pub struct ListingView<'a> {
    page: ListingPage,
    candidates: Vec<&'a Item>,
    options: FilterOptions,
    selection: Selection,
}

impl<'a> ListingView<'a> {
    pub fn new(page: ListingPage, candidates: Vec<&'a Item>, options: FilterOptions) -> Self {
        Self {
            page,
            candidates,
            options,
            selection: Selection::all(),
        }
    }

    /// Open a page over the catalogue with an empty selection
    ///
    /// # Arguments
    /// * `catalogue` - The loaded catalogue
    /// * `page` - Which page to open
    /// * `settings` - Home page size and options scope
    pub fn open(catalogue: &'a Catalogue, page: ListingPage, settings: &ListingSettings) -> Self {
        let candidates = page.candidates(catalogue, settings.home_page_size);
        let options = match settings.options_scope {
            OptionsScope::Page => derive_options(candidates.iter().copied()),
            OptionsScope::Catalogue => derive_options(catalogue.get_items()),
        };
        Self::new(page, candidates, options)
    }

    pub fn page(&self) -> ListingPage {
        self.page
    }

    pub fn candidates(&self) -> &[&'a Item] {
        &self.candidates
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn select_tag(&mut self, tag: impl Into<String>) {
        self.selection.tag = tag.into();
    }

    pub fn select_location(&mut self, location: impl Into<String>) {
        self.selection.location = location.into();
    }

    pub fn reset(&mut self) {
        self.selection.reset();
    }

    /// Candidates that satisfy the current selection
    pub fn visible(&self) -> Vec<&'a Item> {
        apply_selection(self.candidates.iter().copied(), &self.selection)
    }
}
