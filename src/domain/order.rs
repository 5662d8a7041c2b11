//! Order and item records
//!
//! These are the typed shapes of the orders feed. Fields the job does not
//! interpret are kept in `extra` so that the update call sends back the same
//! object it received, with only the notification counters changed.

use super::errors::DeliveryAlertsError;
use super::result::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Status value that triggers an alert, compared ignoring case
pub const DELIVERED_STATUS: &str = "Delivered";

/// Order identifier as supplied by the orders feed
///
/// The feed may use either a number or a string. The original form is kept
/// so the update call echoes it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderId {
    /// Numeric identifier (`"OrderId": 1`)
    Number(Number),
    /// String identifier (`"OrderId": "A-100"`)
    Text(String),
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderId::Number(n) => write!(f, "{n}"),
            OrderId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        OrderId::Number(Number::from(id))
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        OrderId::Text(id.to_string())
    }
}

impl OrderId {
    /// Reads the `OrderId` field of a raw feed entry, if it has a usable one
    pub fn from_raw(raw: &Value) -> Option<Self> {
        match raw.get("OrderId")? {
            Value::Number(n) => Some(OrderId::Number(n.clone())),
            Value::String(s) => Some(OrderId::Text(s.clone())),
            _ => None,
        }
    }
}

/// A line entry within an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Human readable description of the equipment
    #[serde(rename = "Description")]
    pub description: String,

    /// Free-form status; only "Delivered" (any case) is significant
    #[serde(rename = "Status")]
    pub status: String,

    /// Number of delivery alerts sent for this item so far
    #[serde(rename = "deliveryNotification")]
    pub delivery_notification: u64,

    /// Fields not interpreted by this job
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Creates an item with no extra fields
    pub fn new(description: impl Into<String>, status: impl Into<String>, count: u64) -> Self {
        Self {
            description: description.into(),
            status: status.into(),
            delivery_notification: count,
            extra: Map::new(),
        }
    }

    /// Returns true if the status is exactly "Delivered", ignoring case
    ///
    /// Case folding is ASCII only, so a status spelled with a non-ASCII
    /// look-alike letter (for example a dotless `ı`) does not match.
    pub fn is_delivered(&self) -> bool {
        self.status.eq_ignore_ascii_case(DELIVERED_STATUS)
    }

    /// Increments the delivery notification counter by one
    ///
    /// # Errors
    ///
    /// Returns a validation error if the counter is already at its maximum.
    pub fn record_notification(&mut self) -> Result<()> {
        self.delivery_notification = self.delivery_notification.checked_add(1).ok_or_else(|| {
            DeliveryAlertsError::Validation(format!(
                "Delivery notification counter overflow for item '{}'",
                self.description
            ))
        })?;
        Ok(())
    }
}

/// A unit of work fetched from the orders endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier
    #[serde(rename = "OrderId")]
    pub order_id: OrderId,

    /// Line items, in feed order
    #[serde(rename = "Items")]
    pub items: Vec<Item>,

    /// Fields not interpreted by this job
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Order {
    /// Creates an order with no extra fields
    pub fn new(order_id: impl Into<OrderId>, items: Vec<Item>) -> Self {
        Self {
            order_id: order_id.into(),
            items,
            extra: Map::new(),
        }
    }

    /// Decodes one entry of the orders feed
    ///
    /// # Errors
    ///
    /// Returns a serialization error if a required field is missing or has
    /// the wrong type.
    pub fn from_raw(raw: Value) -> Result<Self> {
        Ok(serde_json::from_value(raw)?)
    }
}
