//! Money calculation utilities using rust_decimal for precision
//!
//! All arithmetic is done with `Decimal` internally, then converted to
//! `f64` at the boundary, rounded to 2 decimal places.

use rust_decimal::prelude::*;
use shared::models::Product;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert a boundary f64 into a Decimal for calculation.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert a Decimal back to f64, rounded to 2 decimal places.
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // A Decimal rounded to 2dp is always representable as f64
        .expect("rounded Decimal converts to f64")
}

/// Line total for a single item: unit cost x quantity.
#[inline]
pub fn line_total(product: &Product) -> Decimal {
    to_decimal(product.cost) * Decimal::from(product.count)
}

/// Sum of `count * cost` over all line items.
pub fn subtotal(products: &[Product]) -> f64 {
    to_f64(products.iter().map(line_total).sum())
}

/// Subtotal plus shipping; an unset shipping cost counts as zero.
pub fn grand_total(subtotal: f64, shipping_cost: Option<f64>) -> f64 {
    to_f64(to_decimal(subtotal) + to_decimal(shipping_cost.unwrap_or(0.0)))
}
