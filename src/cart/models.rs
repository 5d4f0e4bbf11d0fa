//! Cart Domain Models
//!
//! This module contains the cart itself: an ordered list of menu items,
//! one entry per "Add to Cart" click.

use crate::menu::MenuItem;
use rust_decimal::Decimal;
use serde::Serialize;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// One addition to the cart. Entries have no identity beyond their position.
pub type CartEntry = MenuItem;

/// Ordered sequence of cart entries, duplicates allowed
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` to the end of the cart.
    pub fn add(&mut self, item: MenuItem) {
        self.entries.push(item);
    }

    /// Removes the entry at `index`. Out-of-range indices are a no-op and
    /// return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<CartEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Unrounded sum of all entry prices.
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|entry| entry.price).sum()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Catalog ids of all entries, in cart order, duplicates kept.
    pub fn item_ids(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
