//! siteplan-rs - Placement, overlap and order model for site cabin layouts.
//!
//! Catalogued cabins and containers are placed on a ground plane, rotated
//! in quarter turns and dragged on a snapped grid. Footprints are derived
//! on demand to flag collisions, and the working set is consolidated into
//! a checkout payload for a generic cart, Shopify or Stripe.
//!
//! # Example
//!
//! ```
//! use siteplan_rs::{Platform, Position, SitePlan};
//!
//! let mut plan = SitePlan::with_standard_catalogue();
//! let office = plan.add("office6m", Position::new(0.0, 0.0, 0.0)).unwrap().id;
//! plan.add("office6m", Position::new(2.9, 0.0, 0.0));
//! plan.add("toilet", Position::new(10.0, 0.0, 0.0));
//!
//! assert!(plan.overlaps_any(office));
//!
//! let order = plan.build_order(Platform::Stripe);
//! assert_eq!(order.total_quantity(), 3);
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod order;
pub mod validation;

// Re-exports for convenience
pub use config::{GridStep, PlannerConfig};
pub use error::{PlanError, Result};
pub use geometry::{
    aabb_from, aabb_overlap, dims_for_yaw, normalize_yaw, overlaps_any, snap, snap_vec3, Aabb,
    QuarterTurn,
};
pub use layout::{load_layout, LayoutFile};
pub use model::{Catalogue, CatalogueEntry, Dims, ItemId, ItemPatch, PlacedItem, Position, SitePlan};
pub use order::{build_order, OrderLine, OrderPayload, Platform};
pub use validation::{quick_validate, validate_plan, ValidationResult};

/// Load a layout file and place its items over the standard catalogue.
///
/// A layout without its own grid step uses the configured one. Positions
/// are snapped to that step when `snap_positions` is set.
pub fn load_plan(
    input_path: &std::path::Path,
    config: &PlannerConfig,
    snap_positions: bool,
) -> Result<SitePlan> {
    let mut layout = load_layout(input_path)?;
    if layout.grid_step.is_none() {
        layout.grid_step = Some(config.grid_step);
    }

    layout.into_plan(Catalogue::standard(), snap_positions)
}

/// Load a layout file and render its order.
///
/// This is the high-level pipeline used by the command-line tool:
/// 1. Load the layout and place its items ([`load_plan`])
/// 2. Validate the plan (only errors abort, overlaps still order)
/// 3. Aggregate lines and build the payload for the configured platform
pub fn order_from_layout(
    input_path: &std::path::Path,
    config: &PlannerConfig,
    snap_positions: bool,
) -> Result<OrderPayload> {
    let plan = load_plan(input_path, config, snap_positions)?;

    quick_validate(&plan)?;

    let lines = order::aggregate_lines(plan.items(), plan.catalogue());
    tracing::info!(
        "{} unit(s) on {} line(s), {:.2} per week",
        order::total_quantity(&lines),
        lines.len(),
        order::weekly_total(&lines)
    );

    Ok(OrderPayload::render(lines, config.platform))
}
