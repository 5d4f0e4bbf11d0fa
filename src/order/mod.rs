//! Order Module
//!
//! This module contains order submission:
//! - Wire models (OrderRequest, OrderReceipt)
//! - The submitter abstraction and its HTTP implementation
//! - The "Place Order" form handler

pub mod handlers;
pub mod models;
pub mod submitter;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{OrderReceipt, OrderRequest};
pub use submitter::{HttpOrderSubmitter, OrderSubmitter};
