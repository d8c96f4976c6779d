use serde::{Deserialize, Serialize};

/// A single order record as returned by the orders API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub sku: String,
    pub quantity: i64,
    pub customer_id: i64,
}

/// List orders response. Matches the `GET /orders` payload shape:
/// `{"orders": [...]}`, in the order the source produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderList {
    pub orders: Vec<Order>,
}

impl OrderList {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
