//! Student Cafe Library
//!
//! This library provides the ordering UI of the Student Cafe demo: menu
//! loading (built-in or from the catalog service), per-visitor carts and
//! order submission to the order service, served as an HTML page.

// Domain modules
pub mod cart;
pub mod menu;
pub mod order;
pub mod session;

// Infrastructure
pub mod config;
pub mod error;
pub mod http;
pub mod router;

pub use error::{CafeError, Result};
