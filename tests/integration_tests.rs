//! Integration tests for the placement, overlap and order pipeline.
//!
//! Payload tests compare the serialized JSON shapes each checkout platform
//! receives. Layout tests go through files on disk.

use pretty_assertions::assert_eq;
use serde_json::json;
use siteplan_rs::layout::load_layout;
use siteplan_rs::{
    aabb_from, aabb_overlap, build_order, dims_for_yaw, load_plan, normalize_yaw, order_from_layout,
    snap, snap_vec3, validate_plan, Catalogue, Dims, GridStep, ItemPatch, OrderPayload, PlacedItem,
    PlanError, Platform, PlannerConfig, Position, QuarterTurn, SitePlan,
};
use std::f64::consts::{FRAC_PI_2, PI};
use std::io::Write;
use tempfile::NamedTempFile;

// ==================== Helpers ====================

fn three_item_plan() -> SitePlan {
    let mut plan = SitePlan::with_standard_catalogue();
    plan.add("office6m", Position::new(0.0, 0.0, 0.0));
    plan.add("office6m", Position::new(10.0, 0.0, 0.0));
    plan.add("toilet", Position::new(20.0, 0.0, 0.0));
    plan
}

fn write_layout(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write layout");
    file
}

fn step(s: f64) -> GridStep {
    GridStep::new(s).unwrap()
}

// ==================== Geometry scenarios ====================

#[test]
fn test_snap_scenarios() {
    assert_eq!(snap(0.49, step(1.0)), 0.0);
    assert_eq!(snap(0.51, step(1.0)), 1.0);
    assert_eq!(snap(1.24, step(0.5)), 1.0);
    assert_eq!(snap(1.26, step(0.5)), 1.5);
    assert_eq!(
        snap_vec3(Position::new(1.26, 2.0, -0.74), step(0.5)),
        Position::new(1.5, 2.0, -0.5)
    );
}

#[test]
fn test_zero_step_rejected() {
    let err = GridStep::new(0.0).unwrap_err();
    assert!(matches!(err, PlanError::InvalidGridStep { .. }));
}

#[test]
fn test_yaw_scenarios() {
    assert_eq!(normalize_yaw(0.49 * FRAC_PI_2).radians(), 0.0);
    assert_eq!(normalize_yaw(0.51 * FRAC_PI_2).radians(), FRAC_PI_2);
    assert_eq!(normalize_yaw(-FRAC_PI_2), QuarterTurn::ThreeQuarter);

    let dims = Dims::new(6.0, 3.0, 2.7);
    assert_eq!(dims_for_yaw(dims, 0.0), dims_for_yaw(dims, PI));
    assert_eq!(dims_for_yaw(dims, FRAC_PI_2), Dims::new(3.0, 6.0, 2.7));
    assert_eq!(dims_for_yaw(dims, 3.0 * FRAC_PI_2), Dims::new(3.0, 6.0, 2.7));
}

#[test]
fn test_overlap_scenario() {
    let catalogue = Catalogue::standard();
    let a = PlacedItem::new("office6m", Position::new(0.0, 0.0, 0.0));
    let b = PlacedItem::new("office6m", Position::new(2.9, 0.0, 0.0));
    let c = PlacedItem::new("office6m", Position::new(6.0, 0.0, 0.0));

    let box_a = aabb_from(&a, &catalogue).unwrap();
    let box_b = aabb_from(&b, &catalogue).unwrap();
    let box_c = aabb_from(&c, &catalogue).unwrap();

    assert!(aabb_overlap(&box_a, &box_b));
    assert!(aabb_overlap(&box_b, &box_a));
    assert!(!aabb_overlap(&box_a, &box_c));
    assert!(!aabb_overlap(&box_c, &box_a));
}

#[test]
fn test_rotation_resolves_collision() {
    let mut plan = SitePlan::with_standard_catalogue();
    let a = plan.add("office12m", Position::new(0.0, 0.0, 0.0)).unwrap().id;
    let b = plan.add("office12m", Position::new(0.0, 0.0, 4.0)).unwrap().id;
    assert!(!plan.overlaps_any(a));

    // Rotated, the second office spans z in [-2, 10] and crosses the first
    plan.rotate_quarter(b);
    assert!(plan.overlaps_any(a));
    assert!(plan.overlaps_any(b));

    plan.update(b, ItemPatch::position(Position::new(7.5, 0.0, 4.0)));
    assert!(!plan.overlaps_any(a));
    assert!(plan.overlapping_ids().is_empty());
}

// ==================== Order payloads ====================

#[test]
fn test_generic_payload_snapshot() {
    let json = three_item_plan()
        .build_order(Platform::Generic)
        .to_json_pretty()
        .unwrap();

    insta::assert_snapshot!(json, @r###"
    {
      "currency": "AUD",
      "lines": [
        {
          "sku": "OFF-6",
          "label": "Office 6m",
          "qty": 2,
          "weeklyRate": 210.0
        },
        {
          "sku": "TOI-2",
          "label": "Toilet (2 pan)",
          "qty": 1,
          "weeklyRate": 120.0
        }
      ]
    }
    "###);
}

#[test]
fn test_stripe_payload_snapshot() {
    let json = three_item_plan()
        .build_order(Platform::Stripe)
        .to_json_pretty()
        .unwrap();

    insta::assert_snapshot!(json, @r###"
    {
      "line_items": [
        {
          "quantity": 2,
          "price_data": {
            "currency": "aud",
            "unit_amount": 21000,
            "product_data": {
              "name": "Office 6m",
              "metadata": {
                "sku": "OFF-6"
              }
            }
          }
        },
        {
          "quantity": 1,
          "price_data": {
            "currency": "aud",
            "unit_amount": 12000,
            "product_data": {
              "name": "Toilet (2 pan)",
              "metadata": {
                "sku": "TOI-2"
              }
            }
          }
        }
      ]
    }
    "###);
}

#[test]
fn test_shopify_payload() {
    let payload = three_item_plan().build_order(Platform::Shopify);
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({
            "items": [
                {"sku": "OFF-6", "quantity": 2},
                {"sku": "TOI-2", "quantity": 1}
            ]
        })
    );
}

#[test]
fn test_unknown_platform_renders_generic() {
    let plan = three_item_plan();
    assert_eq!(
        plan.build_order(Platform::from_name("woocommerce")),
        plan.build_order(Platform::Generic)
    );
}

#[test]
fn test_duplicate_starts_unrotated() {
    let mut plan = SitePlan::with_standard_catalogue();
    let id = plan.add("office12m", Position::new(0.0, 0.0, 0.0)).unwrap().id;
    plan.rotate_quarter(id);
    plan.update(id, ItemPatch::color("#ff0000"));

    let copy = plan.duplicate(id).unwrap().clone();
    assert_eq!(copy.yaw, 0.0);
    assert_eq!(copy.color, "#c9d1d9");
    assert_eq!(plan.aabb(copy.id).unwrap().width(), 12.0);
}

#[test]
fn test_catalogue_json_in_table_order() {
    let json = serde_json::to_string_pretty(&Catalogue::standard()).unwrap();
    assert!(json.starts_with("{\n  \"office6m\": {"));
    assert!(json.find("\"office12m\"").unwrap() < json.find("\"toilet\"").unwrap());
    assert!(json.find("\"cont20\"").unwrap() < json.find("\"cont40\"").unwrap());
}

#[test]
fn test_orphaned_items_excluded_from_order() {
    let mut plan = three_item_plan();
    plan.catalogue_mut().remove("toilet");

    let payload = plan.build_order(Platform::Generic);
    assert_eq!(payload.total_quantity(), 2);

    let OrderPayload::Generic(order) = payload else {
        panic!("expected generic payload");
    };
    assert_eq!(order.lines.len(), 1);
    assert_eq!(order.lines[0].sku, "OFF-6");
}

#[test]
fn test_build_order_free_function() {
    let catalogue = Catalogue::standard();
    let items: Vec<PlacedItem> = ["cont20", "cont40", "cont20", "nope"]
        .iter()
        .map(|t| PlacedItem::new(*t, Position::default()))
        .collect();

    let payload = build_order(&items, &catalogue, Platform::Generic);
    assert_eq!(payload.total_quantity(), 3);
}

// ==================== Layout files ====================

const LAYOUT: &str = r#"{
    "items": [
        {"type": "office6m", "position": [0.2, 0, 0.1]},
        {"type": "office6m", "position": [2.8, 0, 0]},
        {"type": "toilet", "position": [12, 0, 0], "yaw": 1.6},
        {"type": "marquee", "position": [30, 0, 0]}
    ]
}"#;

#[test]
fn test_order_from_layout_file() {
    let file = write_layout(LAYOUT);
    let config = PlannerConfig::new(Platform::Shopify);

    let payload = order_from_layout(file.path(), &config, true).unwrap();
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({
            "items": [
                {"sku": "OFF-6", "quantity": 2},
                {"sku": "TOI-2", "quantity": 1}
            ]
        })
    );
}

#[test]
fn test_load_plan_uses_configured_grid() {
    let file = write_layout(LAYOUT);
    let mut config = PlannerConfig::new(Platform::Generic);
    config.cycle_grid_step();

    let plan = load_plan(file.path(), &config, true).unwrap();
    assert_eq!(plan.len(), 3);
    assert_eq!(plan.items()[0].position, Position::new(0.0, 0.0, 0.0));
    assert_eq!(plan.items()[1].position, Position::new(3.0, 0.0, 0.0));

    let unsnapped = load_plan(file.path(), &config, false).unwrap();
    assert!((unsnapped.items()[1].position.x - 2.8).abs() < 1e-9);
}

#[test]
fn test_layout_validation_reports_overlap() {
    let file = write_layout(LAYOUT);
    let layout = load_layout(file.path()).unwrap();
    let plan = layout.into_plan(Catalogue::standard(), true).unwrap();

    // Snapped to a 1m grid the offices sit at x=0 and x=3
    assert_eq!(plan.items()[0].position, Position::new(0.0, 0.0, 0.0));
    assert_eq!(plan.items()[1].position, Position::new(3.0, 0.0, 0.0));

    let result = validate_plan(&plan);
    assert!(result.passed);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("overlap"));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_layout(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, PlanError::FileNotFound { .. }));
    assert_eq!(err.code_value(), -1);
}

#[test]
fn test_load_empty_file() {
    let file = write_layout("   \n");
    let err = load_layout(file.path()).unwrap_err();
    assert!(matches!(err, PlanError::EmptyFile { .. }));
}

#[test]
fn test_load_malformed_file() {
    let file = write_layout("{\"items\": [");
    let err = load_layout(file.path()).unwrap_err();
    assert!(matches!(err, PlanError::Json(_)));
}
