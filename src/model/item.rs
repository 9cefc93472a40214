//! Placed item record: one cabin or container on the ground plane.

use crate::config::DEFAULT_COLOR;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a placed item.
///
/// Generated once at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Create a new unique item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// World-space position. `y` is vertical and ignored by footprint math.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Create a new position.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Position shifted on the ground plane.
    pub fn offset(&self, dx: f64, dz: f64) -> Self {
        Self::new(self.x + dx, self.y, self.z + dz)
    }

    /// Check that every component is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Position {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Position> for [f64; 3] {
    fn from(p: Position) -> Self {
        [p.x, p.y, p.z]
    }
}

/// A unit placed in the working set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    /// Stable unique identifier.
    pub id: ItemId,
    /// Catalogue type identifier.
    #[serde(rename = "type")]
    pub type_id: String,
    /// World position of the footprint centre.
    pub position: Position,
    /// Rotation about the vertical axis in radians, normalized before use.
    pub yaw: f64,
    /// Display color; not used by geometry.
    pub color: String,
}

impl PlacedItem {
    /// Create an unrotated item with a fresh ID and the default color.
    pub fn new(type_id: impl Into<String>, position: Position) -> Self {
        Self {
            id: ItemId::new(),
            type_id: type_id.into(),
            position,
            yaw: 0.0,
            color: DEFAULT_COLOR.to_string(),
        }
    }

    /// Apply a patch in place. Unset fields are left alone.
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(yaw) = patch.yaw {
            self.yaw = yaw;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

/// Partial update of a placed item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub position: Option<Position>,
    pub yaw: Option<f64>,
    pub color: Option<String>,
}

impl ItemPatch {
    /// Patch that moves the item.
    pub fn position(position: Position) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    /// Patch that rotates the item.
    pub fn yaw(yaw: f64) -> Self {
        Self {
            yaw: Some(yaw),
            ..Default::default()
        }
    }

    /// Patch that recolors the item.
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Default::default()
        }
    }
}
