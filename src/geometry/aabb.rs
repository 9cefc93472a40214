//! Axis-aligned footprints on the ground (x/z) plane and overlap tests.

use super::rotation::dims_for_yaw;
use crate::model::{Catalogue, ItemId, PlacedItem};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of an item's footprint.
///
/// Derived from current item state on every query, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min_x: f64,
    pub min_z: f64,
    pub max_x: f64,
    pub max_z: f64,
}

impl Aabb {
    /// Create a box from its corners.
    pub fn new(min_x: f64, min_z: f64, max_x: f64, max_z: f64) -> Self {
        Self {
            min_x,
            min_z,
            max_x,
            max_z,
        }
    }

    /// Create a box from its centre and full extents.
    pub fn from_center(x: f64, z: f64, len: f64, wid: f64) -> Self {
        let hx = len / 2.0;
        let hz = wid / 2.0;
        Self::new(x - hx, z - hz, x + hx, z + hz)
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along z.
    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }

    /// Check if two boxes overlap.
    ///
    /// Boxes that only touch along an edge do not overlap, so units can
    /// be placed flush against each other.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        !(self.max_x <= other.min_x
            || self.min_x >= other.max_x
            || self.max_z <= other.min_z
            || self.min_z >= other.max_z)
    }
}

/// Footprint of an item, or `None` if its type is not in the catalogue.
pub fn aabb_from(item: &PlacedItem, catalogue: &Catalogue) -> Option<Aabb> {
    let entry = catalogue.get(&item.type_id)?;
    let dims = dims_for_yaw(entry.dims, item.yaw);
    Some(Aabb::from_center(
        item.position.x,
        item.position.z,
        dims.len,
        dims.wid,
    ))
}

/// Check if two footprints overlap (strict: touching is not overlapping).
pub fn aabb_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.overlaps(b)
}

/// Check if the item `id` overlaps any other item in `items`.
///
/// Returns false if the item is absent or orphaned. Orphaned neighbours
/// are skipped.
pub fn overlaps_any(id: ItemId, items: &[PlacedItem], catalogue: &Catalogue) -> bool {
    let Some(a) = items
        .iter()
        .find(|it| it.id == id)
        .and_then(|it| aabb_from(it, catalogue))
    else {
        return false;
    };

    items
        .iter()
        .filter(|b| b.id != id)
        .filter_map(|b| aabb_from(b, catalogue))
        .any(|b| a.overlaps(&b))
}

/// Every overlapping index pair `(i, j)` with `i < j`.
pub fn overlapping_pairs(items: &[PlacedItem], catalogue: &Catalogue) -> Vec<(usize, usize)> {
    let boxes: Vec<Option<Aabb>> = items.iter().map(|it| aabb_from(it, catalogue)).collect();
    let mut pairs = Vec::new();

    for i in 0..boxes.len() {
        let Some(a) = boxes[i] else { continue };
        for (j, b) in boxes.iter().enumerate().skip(i + 1) {
            if let Some(b) = b {
                if a.overlaps(b) {
                    pairs.push((i, j));
                }
            }
        }
    }

    pairs
}
