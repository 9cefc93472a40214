//! SitePlan - the working set of placed items.

use super::{Catalogue, ItemId, ItemPatch, PlacedItem, Position};
use crate::config::{GridStep, DUPLICATE_OFFSET};
use crate::geometry::{self, Aabb};
use crate::order::{self, OrderPayload, Platform};
use std::f64::consts::FRAC_PI_2;
use tracing::debug;

/// In-memory working set of placed items plus the catalogue they resolve
/// against.
///
/// All mutation goes through `add`, `update`, `remove` and `clear` (and
/// the convenience operations built on them). Derived values such as
/// footprints and orders are recomputed on every call.
#[derive(Debug, Clone, Default)]
pub struct SitePlan {
    catalogue: Catalogue,
    items: Vec<PlacedItem>,
}

impl SitePlan {
    /// Create an empty plan over the given catalogue.
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            catalogue,
            items: Vec::new(),
        }
    }

    /// Create an empty plan over the standard catalogue.
    pub fn with_standard_catalogue() -> Self {
        Self::new(Catalogue::standard())
    }

    /// The catalogue items resolve against.
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Mutable access to the catalogue. Removing a type orphans its items.
    pub fn catalogue_mut(&mut self) -> &mut Catalogue {
        &mut self.catalogue
    }

    /// Placed items in insertion order.
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Number of placed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is placed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find an item by ID.
    pub fn get(&self, id: ItemId) -> Option<&PlacedItem> {
        self.items.iter().find(|it| it.id == id)
    }

    // === Mutation ===

    /// Place a new unrotated item of `type_id` at `position`.
    ///
    /// Returns `None` without changing anything if the type is unknown.
    pub fn add(&mut self, type_id: &str, position: Position) -> Option<&PlacedItem> {
        if !self.catalogue.contains(type_id) {
            debug!("Ignoring add of unknown type '{}'", type_id);
            return None;
        }

        let item = PlacedItem::new(type_id, position);
        debug!("Added {} '{}' at ({}, {})", item.id, type_id, position.x, position.z);
        self.items.push(item);
        self.items.last()
    }

    /// Apply a patch to an item. Unknown IDs are ignored.
    pub fn update(&mut self, id: ItemId, patch: ItemPatch) {
        match self.items.iter_mut().find(|it| it.id == id) {
            Some(item) => {
                debug!("Updating {}", id);
                item.apply(patch);
            }
            None => debug!("Ignoring update of unknown item {}", id),
        }
    }

    /// Remove an item. Unknown IDs are ignored.
    pub fn remove(&mut self, id: ItemId) {
        let before = self.items.len();
        self.items.retain(|it| it.id != id);
        if self.items.len() < before {
            debug!("Removed {}", id);
        }
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        debug!("Cleared {} item(s)", self.items.len());
        self.items.clear();
    }

    /// Rotate an item a further quarter turn.
    pub fn rotate_quarter(&mut self, id: ItemId) {
        let Some(yaw) = self.get(id).map(|it| it.yaw) else {
            return;
        };
        let turned = geometry::normalize_yaw(yaw + FRAC_PI_2);
        self.update(id, ItemPatch::yaw(turned.radians()));
    }

    /// Place a new item of the same type at a slightly offset position.
    ///
    /// The copy starts unrotated with the default color, like any added
    /// item. Returns `None` if the source is absent or its type no longer
    /// resolves.
    pub fn duplicate(&mut self, id: ItemId) -> Option<&PlacedItem> {
        let source = self.get(id)?;
        let type_id = source.type_id.clone();
        let position = source.position.offset(DUPLICATE_OFFSET, DUPLICATE_OFFSET);
        self.add(&type_id, position)
    }

    /// Move an item to a ground-plane hit point, snapped to the grid.
    ///
    /// The item keeps its height. Non-finite hit coordinates are skipped.
    pub fn drag_to(&mut self, id: ItemId, hit_x: f64, hit_z: f64, step: GridStep) {
        if !hit_x.is_finite() || !hit_z.is_finite() {
            debug!("Skipping drag of {} to non-finite ({}, {})", id, hit_x, hit_z);
            return;
        }
        let Some(y) = self.get(id).map(|it| it.position.y) else {
            return;
        };
        let snapped = geometry::snap_vec3(Position::new(hit_x, y, hit_z), step);
        self.update(id, ItemPatch::position(snapped));
    }

    // === Derived queries ===

    /// Current footprint of an item. `None` if absent or orphaned.
    pub fn aabb(&self, id: ItemId) -> Option<Aabb> {
        self.get(id)
            .and_then(|it| geometry::aabb_from(it, &self.catalogue))
    }

    /// Check if an item overlaps any other item.
    pub fn overlaps_any(&self, id: ItemId) -> bool {
        geometry::overlaps_any(id, &self.items, &self.catalogue)
    }

    /// IDs of every item that overlaps at least one other item.
    pub fn overlapping_ids(&self) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|it| self.overlaps_any(it.id))
            .map(|it| it.id)
            .collect()
    }

    /// Build a checkout payload for the current items.
    pub fn build_order(&self, platform: Platform) -> OrderPayload {
        order::build_order(&self.items, &self.catalogue, platform)
    }
}
