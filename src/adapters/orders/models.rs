//! Wire models for the alert endpoint

use crate::domain::{Item, OrderId};
use serde::{Deserialize, Serialize};

/// Alert raised for one delivered item
///
/// `notification_count` is the item's counter before it is incremented for
/// this delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryAlert {
    /// Owning order
    pub order_id: OrderId,
    /// Item description
    pub description: String,
    /// Notifications already sent for the item
    pub notification_count: u64,
}

impl DeliveryAlert {
    /// Builds the alert for `item` from its current counter value
    pub fn for_item(order_id: &OrderId, item: &Item) -> Self {
        Self {
            order_id: order_id.clone(),
            description: item.description.clone(),
            notification_count: item.delivery_notification,
        }
    }

    /// Human readable alert text
    pub fn message(&self) -> String {
        format!(
            "Alert for delivered item: Order {}, Item: {}, Delivery Notifications: {}",
            self.order_id, self.description, self.notification_count
        )
    }

    /// Request body for the alert endpoint
    pub fn payload(&self) -> AlertPayload {
        AlertPayload {
            message: self.message(),
        }
    }
}

/// JSON body posted to the alert endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertPayload {
    #[serde(rename = "Message")]
    pub message: String,
}
