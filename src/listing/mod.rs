//! Listing filter: selections, pages, and the views that combine them
//!
//! - `selection`: the tag/location `Selection` and its matching rule
//! - `filter`: stateless filtering and option derivation
//! - `page`: named pre-filter candidate sets
//! - `view`: `ListingView`, the per-view owner of a selection

mod filter;
mod page;
mod selection;
mod view;

pub use filter::{FilterOptions, OptionsScope, apply_selection, derive_options, filter_items};
pub use page::{DEFAULT_HOME_PAGE_SIZE, ListingPage};
pub use selection::{ALL, Selection};
pub use view::ListingView;
