//! Footprint geometry: rotation, bounding boxes, overlap and grid snapping.

mod aabb;
mod rotation;
mod snap;

pub use aabb::{aabb_from, aabb_overlap, overlapping_pairs, overlaps_any, Aabb};
pub use rotation::{dims_for_yaw, normalize_yaw, QuarterTurn};
pub use snap::{snap, snap_vec3};
