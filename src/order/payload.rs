//! Checkout payload shapes for each supported platform.

use super::aggregate::{aggregate_lines, OrderLine};
use crate::config::{MINOR_UNITS, ORDER_CURRENCY, STRIPE_CURRENCY};
use crate::error::Result;
use crate::model::{Catalogue, PlacedItem};
use serde::{Deserialize, Serialize};

/// Checkout platform an order is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Plain line list with label and weekly rate.
    #[default]
    Generic,
    /// SKU and quantity only; variant lookup is left to the caller.
    Shopify,
    /// Stripe Checkout `line_items` with inline `price_data`.
    Stripe,
}

impl Platform {
    /// Parse a platform identifier, returning `None` if it is not recognized.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "generic" => Some(Platform::Generic),
            "shopify" => Some(Platform::Shopify),
            "stripe" => Some(Platform::Stripe),
            _ => None,
        }
    }

    /// Resolve a platform identifier.
    ///
    /// Unrecognized identifiers fall back to [`Platform::Generic`] instead of
    /// failing. Whether to reject them outright is still an open question.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    /// Lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Generic => "generic",
            Platform::Shopify => "shopify",
            Platform::Stripe => "stripe",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `{currency, lines}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericOrder {
    pub currency: String,
    pub lines: Vec<OrderLine>,
}

/// `{items: [{sku, quantity}]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopifyOrder {
    pub items: Vec<ShopifyItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopifyItem {
    pub sku: String,
    pub quantity: u32,
}

/// `{line_items: [{quantity, price_data}]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripeOrder {
    pub line_items: Vec<StripeLineItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripeLineItem {
    pub quantity: u32,
    pub price_data: StripePriceData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripePriceData {
    pub currency: String,
    /// Weekly rate in cents.
    pub unit_amount: i64,
    pub product_data: StripeProductData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripeProductData {
    pub name: String,
    pub metadata: StripeMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripeMetadata {
    pub sku: String,
}

/// An order rendered for one platform.
///
/// Serializes to the platform's own shape with no enum tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderPayload {
    Generic(GenericOrder),
    Shopify(ShopifyOrder),
    Stripe(StripeOrder),
}

impl OrderPayload {
    /// Render aggregated lines for a platform.
    pub fn render(lines: Vec<OrderLine>, platform: Platform) -> Self {
        match platform {
            Platform::Generic => OrderPayload::Generic(GenericOrder {
                currency: ORDER_CURRENCY.to_string(),
                lines,
            }),
            Platform::Shopify => OrderPayload::Shopify(ShopifyOrder {
                items: lines
                    .into_iter()
                    .map(|l| ShopifyItem {
                        sku: l.sku,
                        quantity: l.qty,
                    })
                    .collect(),
            }),
            Platform::Stripe => OrderPayload::Stripe(StripeOrder {
                line_items: lines.into_iter().map(stripe_line_item).collect(),
            }),
        }
    }

    /// Total units in the payload.
    pub fn total_quantity(&self) -> u32 {
        match self {
            OrderPayload::Generic(o) => o.lines.iter().map(|l| l.qty).sum(),
            OrderPayload::Shopify(o) => o.items.iter().map(|i| i.quantity).sum(),
            OrderPayload::Stripe(o) => o.line_items.iter().map(|i| i.quantity).sum(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn stripe_line_item(line: OrderLine) -> StripeLineItem {
    StripeLineItem {
        quantity: line.qty,
        price_data: StripePriceData {
            currency: STRIPE_CURRENCY.to_string(),
            unit_amount: to_minor_units(line.weekly_rate),
            product_data: StripeProductData {
                name: line.label,
                metadata: StripeMetadata { sku: line.sku },
            },
        },
    }
}

/// Convert a price to cents, rounding to the nearest cent.
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * MINOR_UNITS).round() as i64
}

/// Aggregate items by SKU and render the result for `platform`.
pub fn build_order(
    items: &[PlacedItem],
    catalogue: &Catalogue,
    platform: Platform,
) -> OrderPayload {
    OrderPayload::render(aggregate_lines(items, catalogue), platform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;
    use serde_json::json;

    fn sample_items() -> Vec<PlacedItem> {
        ["office6m", "office6m", "toilet"]
            .iter()
            .map(|t| PlacedItem::new(*t, Position::default()))
            .collect()
    }

    // ==================== Platform tests ====================

    #[test]
    fn test_platform_parse() {
        assert_eq!(Platform::parse("stripe"), Some(Platform::Stripe));
        assert_eq!(Platform::parse(" Shopify "), Some(Platform::Shopify));
        assert_eq!(Platform::parse("paypal"), None);
    }

    #[test]
    fn test_platform_unknown_falls_back_to_generic() {
        assert_eq!(Platform::from_name("paypal"), Platform::Generic);
        assert_eq!(Platform::from_name(""), Platform::Generic);
    }

    // ==================== Payload tests ====================

    #[test]
    fn test_generic_payload() {
        let catalogue = Catalogue::standard();
        let payload = build_order(&sample_items(), &catalogue, Platform::Generic);
        let OrderPayload::Generic(order) = payload else {
            panic!("expected generic payload");
        };

        assert_eq!(order.currency, "AUD");
        assert_eq!(order.lines.len(), 2);
        let office = order.lines.iter().find(|l| l.sku == "OFF-6").unwrap();
        assert_eq!(office.qty, 2);
        assert_eq!(office.weekly_rate, 210.0);
        let toilet = order.lines.iter().find(|l| l.sku == "TOI-2").unwrap();
        assert_eq!(toilet.qty, 1);
        assert_eq!(toilet.weekly_rate, 120.0);
    }

    #[test]
    fn test_shopify_payload() {
        let catalogue = Catalogue::standard();
        let payload = build_order(&sample_items(), &catalogue, Platform::Shopify);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({"items": [{"sku": "OFF-6", "quantity": 2}, {"sku": "TOI-2", "quantity": 1}]})
        );
    }

    #[test]
    fn test_stripe_payload() {
        let catalogue = Catalogue::standard();
        let payload = build_order(&sample_items(), &catalogue, Platform::Stripe);
        let OrderPayload::Stripe(order) = payload else {
            panic!("expected stripe payload");
        };

        let toilet = order
            .line_items
            .iter()
            .find(|li| li.price_data.product_data.metadata.sku == "TOI-2")
            .unwrap();
        assert_eq!(toilet.quantity, 1);
        assert_eq!(toilet.price_data.currency, "aud");
        assert_eq!(toilet.price_data.unit_amount, 12000);
        assert_eq!(toilet.price_data.product_data.name, "Toilet (2 pan)");
    }

    #[test]
    fn test_stripe_rounds_to_nearest_cent() {
        assert_eq!(to_minor_units(210.0), 21000);
        assert_eq!(to_minor_units(19.999), 2000);
        assert_eq!(to_minor_units(0.014), 1);
    }

    #[test]
    fn test_total_quantity_matches_resolved_items() {
        let catalogue = Catalogue::standard();
        let mut input = sample_items();
        input.push(PlacedItem::new("hovercraft", Position::default()));

        for platform in [Platform::Generic, Platform::Shopify, Platform::Stripe] {
            assert_eq!(build_order(&input, &catalogue, platform).total_quantity(), 3);
        }
    }

    #[test]
    fn test_empty_order() {
        let catalogue = Catalogue::standard();
        let payload = build_order(&[], &catalogue, Platform::Generic);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"currency": "AUD", "lines": []})
        );
    }
}
