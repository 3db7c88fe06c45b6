//! Directory catalogue: item model and read-only repository
//!
//! - `item`: the `Item` record and its `ItemType`
//! - `repository`: the immutable `Catalogue` plus tag/location vocabularies
//! - `serde_impl`: ISO date parsing for item records

mod item;
mod repository;
mod serde_impl;

pub use item::{Item, ItemType};
pub use repository::{Catalogue, collate, item_locations, item_tags};
pub use serde_impl::parse_item_date;
