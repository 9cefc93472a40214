//! JSON layout file loading.

use crate::config::GridStep;
use crate::error::{PlanError, Result};
use crate::geometry::snap_vec3;
use crate::model::{Catalogue, ItemPatch, Position, SitePlan};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// One item entry in a layout file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutItem {
    /// Catalogue type identifier.
    #[serde(rename = "type")]
    pub type_id: String,
    /// `[x, y, z]` position of the footprint centre.
    #[serde(default)]
    pub position: Position,
    /// Yaw in radians.
    #[serde(default)]
    pub yaw: f64,
    /// Display color; the default color is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A layout file: the items to place and the grid they were drawn on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_step: Option<GridStep>,
    #[serde(default)]
    pub items: Vec<LayoutItem>,
}

impl LayoutFile {
    /// Grid step declared by the file, or the default.
    pub fn grid_step(&self) -> GridStep {
        self.grid_step.unwrap_or_default()
    }

    /// Place every item into a new plan.
    ///
    /// Items of unknown type are skipped. With `snap`, x and z are
    /// quantized to the file's grid step.
    pub fn into_plan(self, catalogue: Catalogue, snap: bool) -> Result<SitePlan> {
        let step = self.grid_step();
        let mut plan = SitePlan::new(catalogue);

        for (idx, entry) in self.items.into_iter().enumerate() {
            let p = entry.position;
            if !p.is_finite() {
                return Err(PlanError::NonFiniteCoordinate { x: p.x, z: p.z });
            }
            let position = if snap { snap_vec3(p, step) } else { p };

            let Some(id) = plan.add(&entry.type_id, position).map(|it| it.id) else {
                warn!("Layout item {}: unknown type '{}', skipped", idx + 1, entry.type_id);
                continue;
            };

            plan.update(
                id,
                ItemPatch {
                    yaw: Some(entry.yaw),
                    color: entry.color,
                    ..Default::default()
                },
            );
        }

        debug!("Placed {} item(s) from layout", plan.len());
        Ok(plan)
    }
}

/// Parse layout JSON.
pub fn parse_layout(content: &str) -> Result<LayoutFile> {
    Ok(serde_json::from_str(content)?)
}

/// Load a layout file from disk.
pub fn load_layout(path: &Path) -> Result<LayoutFile> {
    if !path.exists() {
        return Err(PlanError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(PlanError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_layout(&content)
}
