//! Grid snapping for dragged positions.

use crate::config::GridStep;
use crate::model::Position;

/// Round `value` to the nearest multiple of `step`.
///
/// Halfway values round away from zero (`f64::round`).
pub fn snap(value: f64, step: GridStep) -> f64 {
    let step = step.get();
    (value / step).round() * step
}

/// Snap `x` and `z` to the grid; `y` passes through unchanged.
pub fn snap_vec3(position: Position, step: GridStep) -> Position {
    Position::new(snap(position.x, step), position.y, snap(position.z, step))
}
