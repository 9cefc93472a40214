//! Consolidation of placed items into per-SKU order lines.

use crate::model::{Catalogue, PlacedItem};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// One line of an order: every placed unit sharing a SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub sku: String,
    pub label: String,
    /// Number of units, always at least 1.
    pub qty: u32,
    /// Rental price per unit per week.
    #[serde(rename = "weeklyRate")]
    pub weekly_rate: f64,
}

impl OrderLine {
    /// Weekly price of the whole line.
    pub fn line_total(&self) -> f64 {
        self.weekly_rate * f64::from(self.qty)
    }
}

/// Group items by SKU.
///
/// Items whose type does not resolve are skipped. Lines appear in order of
/// first encounter; consumers should not depend on that order.
pub fn aggregate_lines(items: &[PlacedItem], catalogue: &Catalogue) -> Vec<OrderLine> {
    let mut lines: Vec<OrderLine> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in items {
        let Some(entry) = catalogue.get(&item.type_id) else {
            warn!(
                "Excluding item {} from order: unknown type '{}'",
                item.id, item.type_id
            );
            continue;
        };

        match index.get(entry.sku.as_str()).copied() {
            Some(i) => lines[i].qty += 1,
            None => {
                index.insert(entry.sku.as_str(), lines.len());
                lines.push(OrderLine {
                    sku: entry.sku.clone(),
                    label: entry.label.clone(),
                    qty: 1,
                    weekly_rate: entry.weekly_rate,
                });
            }
        }
    }

    lines
}

/// Total units across all lines.
pub fn total_quantity(lines: &[OrderLine]) -> u32 {
    lines.iter().map(|l| l.qty).sum()
}

/// Total weekly price across all lines.
pub fn weekly_total(lines: &[OrderLine]) -> f64 {
    lines.iter().map(OrderLine::line_total).sum()
}
