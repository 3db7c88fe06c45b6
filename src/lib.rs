//! HighlandXR Directory MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for the
//! HighlandXR directory: a fixed catalogue of XR events and businesses across
//! the Scottish Highlands, browsable by page, tag, and location.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `DirectoryServerHandler` - Handles MCP protocol communication
//! - **Listing Layer**: `listing` module - Pages, selections, and the conjunctive filter
//! - **Data Layer**: `catalogue` and `storage` modules - The immutable item catalogue and its JSON source
//!
//! The catalogue is loaded once at startup and shared read-only by every tool
//! call; each call builds its own `ListingView`, so no selection state outlives
//! a request.
//!
//! # Example
//!
//! ```no_run
//! use highlandxr_mcp::{CatalogueSource, DirectoryServerHandler, ListingSettings};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = DirectoryServerHandler::new(&CatalogueSource::Bundled, ListingSettings::default())?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod catalogue;
pub mod config;
pub mod error;
pub mod formatting;
mod handlers;
pub mod listing;
pub mod storage;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::Arc;
use tracing::info;

// Re-export commonly used types
pub use catalogue::{Catalogue, Item, ItemType};
pub use config::{Config, ListingSettings};
pub use error::{ConfigError, LoadError};
pub use listing::{FilterOptions, ListingPage, ListingView, OptionsScope, Selection};
pub use storage::CatalogueSource;

/// MCP Server handler for the HighlandXR directory
///
/// Holds the catalogue behind an `Arc`; nothing mutates it after load, so the
/// handler needs no locking.
pub struct DirectoryServerHandler {
    pub(crate) catalogue: Arc<Catalogue>,
    pub(crate) settings: ListingSettings,
}

impl DirectoryServerHandler {
    /// Create a new directory server handler
    ///
    /// # Arguments
    /// * `source` - Where to load the catalogue from
    /// * `settings` - Home page size and options scope
    ///
    /// # Returns
    /// Result containing the handler, or the load error for a malformed dataset
    ///
    /// # Example
    /// ```no_run
    /// # use highlandxr_mcp::{CatalogueSource, DirectoryServerHandler, ListingSettings};
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let source = CatalogueSource::file("items.json");
    /// let handler = DirectoryServerHandler::new(&source, ListingSettings::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(source: &CatalogueSource, settings: ListingSettings) -> Result<Self> {
        let catalogue = source.load()?;
        info!(
            items = catalogue.len(),
            home_page_size = settings.home_page_size,
            options_scope = %settings.options_scope,
            "Directory ready"
        );
        Ok(Self::with_catalogue(Arc::new(catalogue), settings))
    }

    /// Create a handler over an already-loaded catalogue
    pub fn with_catalogue(catalogue: Arc<Catalogue>, settings: ListingSettings) -> Self {
        Self {
            catalogue,
            settings,
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn settings(&self) -> &ListingSettings {
        &self.settings
    }
}

/// HighlandXR directory server: XR events and businesses across the Scottish Highlands.
///
/// The directory is read-only. Browse it by page, then narrow with a tag and a location.
///
/// Key concepts:
/// - **home**: the first listings of the directory, events and businesses mixed
/// - **events**: every event (meetups, workshops, showcases)
/// - **businesses**: every business (studios, venues, organisations)
/// - **tag** / **location**: exact-match filters; "all" (or empty) means no constraint.
///   Both filters must match for a listing to be shown.
///
/// Workflow: filter_options to see valid tags/locations → list to browse → get_item for details.
#[mcp_server]
impl McpServer for DirectoryServerHandler {
    /// **Browse**: List a page of the directory, optionally filtered by tag and location.
    /// **Use**: No filters=whole page; tag="vr" shows listings tagged vr; tag+location must both match.
    /// **Tip**: Call filter_options first to see the exact tag and location values.
    #[tool]
    async fn list(
        &self,
        /// Page: home/events/businesses. Empty=home.
        page: Option<String>,
        /// Tag to match exactly. Empty or "all"=any tag.
        tag: Option<String>,
        /// Location to match exactly (e.g., "Inverness"). Empty or "all"=any location.
        location: Option<String>,
    ) -> McpResult<String> {
        self.handle_list(page, tag, location).await
    }

    /// **Detail**: Show everything about one listing: dates, tags, overview, and website.
    /// **Use**: Pass an ID from list output (the value in square brackets).
    #[tool]
    async fn get_item(
        &self,
        /// Listing ID (e.g., "inverness-xr-meetup")
        id: String,
    ) -> McpResult<String> {
        self.handle_get_item(id).await
    }

    /// **Filter vocabulary**: Show the tags and locations a page can be filtered by.
    /// **Use**: Values are listed in alphabetical order; "all" clears a filter.
    #[tool]
    async fn filter_options(
        &self,
        /// Page: home/events/businesses. Empty=home.
        page: Option<String>,
    ) -> McpResult<String> {
        self.handle_filter_options(page).await
    }
}
