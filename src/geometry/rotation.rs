//! Rotation normalization to quarter turns.
//!
//! Only orthogonal placements are supported: any yaw is reduced into
//! `[0, 2π)` and snapped to the nearest multiple of `π/2`. A yaw exactly
//! halfway between two quarter turns goes to the higher one, because the
//! quotient is non-negative when it is rounded and `f64::round` rounds
//! half away from zero.

use crate::model::Dims;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

/// One of the four supported orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuarterTurn {
    /// 0°
    #[default]
    Zero,
    /// 90°
    Quarter,
    /// 180°
    Half,
    /// 270°
    ThreeQuarter,
}

impl QuarterTurn {
    /// Quarter turn from a count of quarter turns (taken modulo 4).
    pub fn from_count(count: u8) -> Self {
        match count % 4 {
            0 => QuarterTurn::Zero,
            1 => QuarterTurn::Quarter,
            2 => QuarterTurn::Half,
            _ => QuarterTurn::ThreeQuarter,
        }
    }

    /// Number of quarter turns (0..=3).
    pub fn count(self) -> u8 {
        self as u8
    }

    /// Angle in radians: exactly `count * π/2`.
    pub fn radians(self) -> f64 {
        f64::from(self.count()) * FRAC_PI_2
    }

    /// Check if length and width trade places in this orientation.
    pub fn swaps_axes(self) -> bool {
        matches!(self, QuarterTurn::Quarter | QuarterTurn::ThreeQuarter)
    }
}

/// Reduce any yaw in radians to the nearest quarter turn.
pub fn normalize_yaw(yaw: f64) -> QuarterTurn {
    // rem_euclid leaves values already in [0, 2π) untouched
    let a = yaw.rem_euclid(TAU);
    let q = (a / FRAC_PI_2).round() as u8;
    QuarterTurn::from_count(q)
}

/// Footprint dimensions as occupied in world space after rotation.
///
/// Length and width swap at 90° and 270°; height never changes.
pub fn dims_for_yaw(dims: Dims, yaw: f64) -> Dims {
    if normalize_yaw(yaw).swaps_axes() {
        Dims::new(dims.wid, dims.len, dims.ht)
    } else {
        dims
    }
}
