//! Filter options handler for the directory MCP server

use crate::DirectoryServerHandler;
use crate::formatting;
use crate::listing::ListingView;
use crate::validation;
use mcp_attr::Result as McpResult;
use tracing::instrument;

impl DirectoryServerHandler {
    /// Handles option lookups - lists the tags and locations a page can be filtered by.
    #[instrument(skip(self))]
    pub async fn handle_filter_options(&self, page: Option<String>) -> McpResult<String> {
        let page = validation::parse_page(page.as_deref())?;
        let view = ListingView::open(&self.catalogue, page, &self.settings);
        Ok(formatting::format_filter_options(
            &view,
            self.settings.options_scope,
        ))
    }
}
