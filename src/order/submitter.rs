//! Order submission.

use super::models::{OrderReceipt, OrderRequest};
use crate::error::Result;
use crate::http::ApiClient;
use async_trait::async_trait;

/// Gateway path of the order service's create endpoint
pub const ORDERS_PATH: &str = "/api/orders/orders";

/// Sends one order to whoever assigns order ids.
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    async fn submit(&self, order: &OrderRequest) -> Result<OrderReceipt>;
}

/// Posts orders to the order service through the gateway.
#[derive(Debug, Clone)]
pub struct HttpOrderSubmitter {
    client: ApiClient,
}

impl HttpOrderSubmitter {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderSubmitter for HttpOrderSubmitter {
    async fn submit(&self, order: &OrderRequest) -> Result<OrderReceipt> {
        let receipt: OrderReceipt = self.client.post_json(ORDERS_PATH, order).await?;
        tracing::info!("Order {} accepted ({} item(s))", receipt.id, order.item_ids.len());
        Ok(receipt)
    }
}
