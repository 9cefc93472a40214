//! Validation of a site plan before checkout.

use crate::error::{PlanError, Result};
use crate::geometry::overlapping_pairs;
use crate::model::SitePlan;

/// Outcome of checking a plan. Warnings never block an order.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// False once any error is recorded.
    pub passed: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Empty, passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Record an error and mark the result as failed.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Fold another pass into this one, keeping message order.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        self.passed &= other.passed;
    }
}

/// Validate a plan.
///
/// Orphaned items and overlapping footprints are warnings: the plan can
/// still be ordered. Non-finite coordinates are errors.
pub fn validate_plan(plan: &SitePlan) -> ValidationResult {
    let mut result = validate_items(plan);
    result.merge(validate_overlaps(plan));
    result
}

/// Per-item checks: finite placement and a type the catalogue knows.
fn validate_items(plan: &SitePlan) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (idx, item) in plan.items().iter().enumerate() {
        if !item.position.is_finite() || !item.yaw.is_finite() {
            result.add_error(format!(
                "Item {} ({}): Non-finite position or rotation",
                idx + 1,
                item.id
            ));
        }

        if !plan.catalogue().contains(&item.type_id) {
            result.add_warning(format!(
                "Item {} ({}): Unknown type '{}', excluded from order",
                idx + 1,
                item.id,
                item.type_id
            ));
        }
    }

    result
}

/// Pairwise footprint overlap checks.
fn validate_overlaps(plan: &SitePlan) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let items = plan.items();

    for (i, j) in overlapping_pairs(items, plan.catalogue()) {
        result.add_warning(format!(
            "Items {} and {} overlap ({} / {})",
            i + 1,
            j + 1,
            items[i].type_id,
            items[j].type_id
        ));
    }

    result
}

/// Fail with [`PlanError::ValidationFailed`] if the plan has any error.
pub fn quick_validate(plan: &SitePlan) -> Result<()> {
    let result = validate_plan(plan);

    if !result.passed {
        return Err(PlanError::ValidationFailed {
            message: result.errors.join("; "),
        });
    }

    Ok(())
}
