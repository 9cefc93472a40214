//! Configuration constants and settings for the planner.

use crate::error::{PlanError, Result};
use crate::order::Platform;
use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Default drag grid step in metres.
pub const DEFAULT_GRID_STEP: f64 = 1.0;

/// Grid steps visited by [`GridStep::next`], in order.
pub const GRID_STEP_CYCLE: [f64; 3] = [1.0, 0.5, 0.25];

/// Offset applied on both x and z when duplicating an item.
pub const DUPLICATE_OFFSET: f64 = 0.5;

/// Display color given to newly added items.
pub const DEFAULT_COLOR: &str = "#c9d1d9";

/// Currency code of generic order payloads.
pub const ORDER_CURRENCY: &str = "AUD";

/// Currency code of Stripe line items (Stripe expects lowercase).
pub const STRIPE_CURRENCY: &str = "aud";

/// Minor currency units per major unit (cents per dollar).
pub const MINOR_UNITS: f64 = 100.0;

/// Grid step used to quantize drag coordinates.
///
/// Always positive and finite; [`GridStep::new`] rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct GridStep(f64);

impl GridStep {
    /// Create a grid step, rejecting zero, negative and non-finite values.
    pub fn new(step: f64) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(PlanError::InvalidGridStep { step });
        }
        Ok(Self(step))
    }

    /// Get the step size.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Next step in the 1 -> 0.5 -> 0.25 -> 1 cycle.
    ///
    /// A step outside the cycle goes back to the default.
    pub fn next(self) -> Self {
        let pos = GRID_STEP_CYCLE
            .iter()
            .position(|&s| float_cmp::approx_eq(s, self.0));

        match pos {
            Some(i) => Self(GRID_STEP_CYCLE[(i + 1) % GRID_STEP_CYCLE.len()]),
            None => Self::default(),
        }
    }
}

impl Default for GridStep {
    fn default() -> Self {
        Self(DEFAULT_GRID_STEP)
    }
}

impl TryFrom<f64> for GridStep {
    type Error = PlanError;

    fn try_from(step: f64) -> Result<Self> {
        Self::new(step)
    }
}

impl From<GridStep> for f64 {
    fn from(step: GridStep) -> f64 {
        step.0
    }
}

impl std::fmt::Display for GridStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}m", self.0)
    }
}

/// Planner session configuration.
#[derive(Debug, Clone, Default)]
pub struct PlannerConfig {
    /// Grid step applied to dragged positions.
    pub grid_step: GridStep,
    /// Checkout platform the order payload is rendered for.
    pub platform: Platform,
}

impl PlannerConfig {
    /// Create a configuration for the given platform with the default grid.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            ..Default::default()
        }
    }

    /// Advance the grid step to the next value in the cycle.
    pub fn cycle_grid_step(&mut self) {
        self.grid_step = self.grid_step.next();
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }
}
