//! Derived appointment totals
//!
//! Totals are always recomputed from the current service selection,
//! never edited directly. Price sums run on `Decimal` internally and
//! convert back to `f64` at the model boundary.

use rust_decimal::prelude::*;
use shared::models::Service;

/// Rounding for monetary values (2 decimal places)
const DECIMAL_PLACES: u32 = 2;

/// Aggregate duration and price for a service selection
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionTotals {
    /// Sum of selected services' durations in minutes
    pub duration: i64,
    /// Sum of selected services' prices in currency unit
    pub price: f64,
}

/// Convert an f64 price to Decimal for precise arithmetic
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert a Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Compute totals over the services whose id is in the selection.
///
/// Pure and order-independent; ids without a matching service contribute
/// nothing; an empty selection yields 0/0.
pub fn selection_totals(services: &[Service], selected: &[String]) -> SelectionTotals {
    let mut duration = 0i64;
    let mut price = Decimal::ZERO;

    for service in services {
        if selected.iter().any(|id| id == &service.id) {
            duration += service.duration;
            price += to_decimal(service.price);
        }
    }

    SelectionTotals {
        duration,
        price: to_f64(price),
    }
}
