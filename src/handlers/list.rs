//! List handler for the directory MCP server

use crate::DirectoryServerHandler;
use crate::formatting;
use crate::listing::ListingView;
use crate::validation;
use mcp_attr::Result as McpResult;
use tracing::{debug, instrument};

impl DirectoryServerHandler {
    /// Handles list operations - opens the page, applies the selection, and formats the result.
    ///
    /// # Arguments
    /// * `page` - home/events/businesses; `None` or blank means home
    /// * `tag` - Tag to match; `None`, blank, or "all" means any tag
    /// * `location` - Location to match; `None`, blank, or "all" means any location
    #[instrument(skip(self))]
    pub async fn handle_list(
        &self,
        page: Option<String>,
        tag: Option<String>,
        location: Option<String>,
    ) -> McpResult<String> {
        let page = validation::parse_page(page.as_deref())?;

        let mut view = ListingView::open(&self.catalogue, page, &self.settings);
        view.select_tag(validation::normalize_selection_value(tag));
        view.select_location(validation::normalize_selection_value(location));

        let visible = view.visible();
        debug!(
            candidates = view.candidates().len(),
            visible = visible.len(),
            "Listing computed"
        );

        Ok(formatting::format_listing(&view, &visible))
    }
}
