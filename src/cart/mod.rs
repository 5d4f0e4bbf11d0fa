//! Shopping Cart Domain Module
//!
//! This module contains all cart business logic, including:
//! - Domain models (Cart, CartEntry)
//! - Display helpers (price formatting, summaries)
//! - Form handlers for the page's cart buttons

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{Cart, CartEntry};
