//! Order Wire Models
//!
//! Request and response bodies of the order service.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/orders/orders`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    /// One catalog id per cart entry, in cart order
    pub item_ids: Vec<String>,
}

/// What the order service answers on success
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderReceipt {
    /// Server-assigned order identifier
    pub id: String,

    #[serde(default)]
    pub item_ids: Vec<String>,

    #[serde(default)]
    pub status: Option<String>,
}
