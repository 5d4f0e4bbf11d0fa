//! Cart Display Helpers
//!
//! This module contains helper functions for formatting prices and cart
//! contents.

use super::models::CartEntry;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a price with exactly two decimals, rounding half away from zero.
///
/// Example output: `"5.75"`, `"5.00"`.
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Produces a human-readable one-line summary for a list of cart entries,
/// grouping repeated items in order of first appearance.
///
/// Example output: `"2x Coffee, 1x Muffin"`.
pub fn format_item_summary(entries: &[CartEntry]) -> String {
    let mut counts: Vec<(&str, u32)> = Vec::new();
    for entry in entries {
        if let Some(existing) = counts.iter_mut().find(|(name, _)| *name == entry.name) {
            existing.1 += 1;
        } else {
            counts.push((entry.name.as_str(), 1));
        }
    }

    counts
        .iter()
        .map(|(name, quantity)| format!("{}x {}", quantity, name))
        .collect::<Vec<_>>()
        .join(", ")
}
