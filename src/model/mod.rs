//! Data model types for site planning.

mod catalogue;
mod item;
mod plan;

pub use catalogue::{Catalogue, CatalogueEntry, Dims};
pub use item::{ItemId, ItemPatch, PlacedItem, Position};
pub use plan::SitePlan;
