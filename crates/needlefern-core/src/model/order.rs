//! Order intake payloads.
//!
//! None of these types are persisted: an [`OrderData`] arrives, is acknowledged with an
//! [`OrderAck`], and is forgotten.
use crate::model::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Confirmation text returned for every accepted order.
pub const ORDER_ACCEPTED_MESSAGE: &str = "Order successfully processed and payment initiated.";

/// Placeholder order identifier derived from the submission time in milliseconds.
///
/// Two submissions within the same millisecond get the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub i64);

impl OrderId {
    /// Current wall-clock time as milliseconds since the Unix epoch.
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp_millis())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of a submitted cart. Neither field is checked against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: ProductId,
    pub quantity: i64,
}

/// Payload submitted at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderData {
    pub name: String,
    pub email: String,
    pub payment_method: String,
    pub items: Vec<OrderItem>,
}

/// Acknowledgment returned once an order has been taken in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAck {
    pub message: String,
    pub order_id: OrderId,
    pub total_items: usize,
}

impl OrderAck {
    pub fn new(order_id: OrderId, total_items: usize) -> Self {
        Self {
            message: ORDER_ACCEPTED_MESSAGE.to_string(),
            order_id,
            total_items,
        }
    }
}
