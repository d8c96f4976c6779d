//! Order listing with a switchable stub.
//!
//! [`OrderClient`] is fixed to one mode when it is built. In stub mode it never
//! touches the network and returns the same canned [`OrderList`] as
//! [`OrderClientStub`], which has the exact shape of a real API response.

use crate::{ApiClient, ClientError};
use stowage_core::{Order, OrderList};

/// Canned orders for tests. No inputs, no I/O, no failure modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderClientStub;

impl OrderClientStub {
    pub fn new() -> Self {
        OrderClientStub
    }

    pub fn list_orders(&self) -> OrderList {
        OrderList::new(vec![
            Order {
                id: 1,
                sku: "SKU1".to_string(),
                quantity: 1,
                customer_id: 1,
            },
            Order {
                id: 2,
                sku: "SKU2".to_string(),
                quantity: 2,
                customer_id: 2,
            },
        ])
    }
}

/// Orders client, either backed by the API or by [`OrderClientStub`].
#[derive(Debug, Clone)]
pub enum OrderClient {
    Stub(OrderClientStub),
    Real(ApiClient),
}

impl OrderClient {
    /// Build a stub client when `use_stub` is set, otherwise a real client
    /// configured from the environment (see [`ApiClient::from_env`]).
    pub fn new(use_stub: bool) -> Result<Self, ClientError> {
        Self::from_lookup(use_stub, |name| std::env::var(name).ok())
    }

    /// Like [`OrderClient::new`], with the real client configured through
    /// `lookup` (see [`ApiClient::from_lookup`]).
    pub fn from_lookup<F>(use_stub: bool, lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if use_stub {
            Ok(Self::stub())
        } else {
            Ok(Self::real(ApiClient::from_lookup(lookup)?))
        }
    }

    pub fn stub() -> Self {
        OrderClient::Stub(OrderClientStub)
    }

    pub fn real(api: ApiClient) -> Self {
        OrderClient::Real(api)
    }

    pub fn is_stub(&self) -> bool {
        matches!(self, OrderClient::Stub(_))
    }

    pub async fn list_orders(&self) -> Result<OrderList, ClientError> {
        match self {
            OrderClient::Stub(stub) => Ok(stub.list_orders()),
            OrderClient::Real(api) => api.list_orders().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stub_returns_two_fixed_orders() {
        let orders = OrderClientStub::new().list_orders();

        assert_eq!(orders.len(), 2);
        assert_eq!(
            orders.orders[0],
            Order {
                id: 1,
                sku: "SKU1".to_string(),
                quantity: 1,
                customer_id: 1
            }
        );
        assert_eq!(
            orders.orders[1],
            Order {
                id: 2,
                sku: "SKU2".to_string(),
                quantity: 2,
                customer_id: 2
            }
        );
    }

    #[test]
    fn stub_is_idempotent() {
        let stub = OrderClientStub::new();
        assert_eq!(stub.list_orders(), stub.list_orders());
    }

    #[test]
    fn stub_serializes_like_the_api() {
        let value = serde_json::to_value(OrderClientStub.list_orders()).unwrap();
        assert_eq!(
            value,
            json!({
                "orders": [
                    {"id": 1, "sku": "SKU1", "quantity": 1, "customer_id": 1},
                    {"id": 2, "sku": "SKU2", "quantity": 2, "customer_id": 2}
                ]
            })
        );
    }

    #[tokio::test]
    async fn stub_mode_delegates_to_stub() {
        let client = OrderClient::new(true).unwrap();
        assert!(client.is_stub());

        let orders = client.list_orders().await.unwrap();
        assert_eq!(orders, OrderClientStub.list_orders());
    }

    #[test]
    fn real_mode_is_not_stub() {
        let api = ApiClient::new("http://localhost:3000/", None).unwrap();
        let client = OrderClient::real(api);

        assert!(!client.is_stub());
        match client {
            OrderClient::Real(api) => assert_eq!(api.base_url(), "http://localhost:3000"),
            OrderClient::Stub(_) => unreachable!(),
        }
    }

    #[test]
    fn real_mode_reads_url_and_key_from_lookup() {
        let vars = |name: &str| match name {
            "API_URL" => Some("http://orders.internal:8080/".to_string()),
            "API_KEY" => Some("k-123".to_string()),
            _ => None,
        };

        let client = OrderClient::from_lookup(false, vars).unwrap();

        match client {
            OrderClient::Real(api) => assert_eq!(api.base_url(), "http://orders.internal:8080"),
            OrderClient::Stub(_) => panic!("expected the real client"),
        }
    }

    #[test]
    fn stub_mode_ignores_lookup() {
        let client = OrderClient::from_lookup(true, |_| panic!("no lookup in stub mode")).unwrap();
        assert!(client.is_stub());
    }
}
