//! Menu Domain Models
//!
//! This module contains the menu item type and the validated, non-empty
//! menu built from it.

use crate::error::{CafeError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// =============================================================================
// Menu Domain Models
// =============================================================================

/// A single orderable item, as served by the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Catalog identifier, unique within a menu
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit price, a JSON number on the wire
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// A non-empty list of menu items with unique ids and non-negative prices.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Validates `items` and wraps them.
    pub fn new(items: Vec<MenuItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(CafeError::InvalidMenu("menu has no items".into()));
        }

        let mut seen = HashSet::new();
        for item in &items {
            if item.price.is_sign_negative() && !item.price.is_zero() {
                return Err(CafeError::InvalidMenu(format!(
                    "item {} has a negative price",
                    item.id
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CafeError::InvalidMenu(format!(
                    "item id {} appears more than once",
                    item.id
                )));
            }
        }

        Ok(Self { items })
    }

    /// The built-in menu used when no catalog is configured or reachable.
    pub fn fallback() -> Self {
        Self {
            items: vec![
                MenuItem::new("1", "Coffee", Decimal::new(250, 2)),
                MenuItem::new("2", "Sandwich", Decimal::new(500, 2)),
                MenuItem::new("3", "Muffin", Decimal::new(325, 2)),
            ],
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Looks an item up by its catalog id.
    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
