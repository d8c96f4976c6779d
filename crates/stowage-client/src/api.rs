//! Domain methods for the orders API client.

use crate::{api_prefix, ApiClient, ClientError};
use stowage_core::OrderList;

impl ApiClient {
    /// List all orders. Matches `GET /orders`.
    pub async fn list_orders(&self) -> Result<OrderList, ClientError> {
        let orders: OrderList = self.get(&format!("{}/orders", api_prefix()), &[]).await?;

        tracing::debug!(count = orders.len(), "Listed orders");

        Ok(orders)
    }
}
