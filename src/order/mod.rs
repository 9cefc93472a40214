//! Order aggregation and checkout payload rendering.

mod aggregate;
mod payload;

pub use aggregate::{aggregate_lines, total_quantity, weekly_total, OrderLine};
pub use payload::{
    build_order, to_minor_units, GenericOrder, OrderPayload, Platform, ShopifyItem, ShopifyOrder,
    StripeLineItem, StripeMetadata, StripeOrder, StripePriceData, StripeProductData,
};
