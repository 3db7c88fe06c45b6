//! Item detail handler for the directory MCP server

use crate::DirectoryServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;
use tracing::{debug, instrument};

impl DirectoryServerHandler {
    /// Handles detail lookups - an unknown ID is reported as text, not as an error.
    #[instrument(skip(self))]
    pub async fn handle_get_item(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_item_id(&id);

        match self.catalogue.get_item_by_id(&id) {
            Some(item) => Ok(formatting::format_item_detail(item)),
            None => {
                debug!(%id, "Item not found");
                Ok(formatting::format_item_not_found(&id))
            }
        }
    }
}
