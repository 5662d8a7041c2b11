//! Orders gateway trait
//!
//! The trait is the seam between the processing logic and the HTTP
//! endpoints. [`HttpOrdersGateway`](super::HttpOrdersGateway) is the
//! production implementation.

use super::models::DeliveryAlert;
use crate::domain::{Order, Result};
use async_trait::async_trait;
use serde_json::Value;

/// Result of a POST whose response body is ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    /// Endpoint answered with a 2xx status
    Accepted,
    /// Endpoint answered with any other status
    Rejected {
        /// HTTP status code
        status: u16,
    },
}

impl CallOutcome {
    /// Maps an HTTP status code to an outcome
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            CallOutcome::Accepted
        } else {
            CallOutcome::Rejected { status }
        }
    }

    /// Returns true for [`CallOutcome::Accepted`]
    pub fn is_accepted(&self) -> bool {
        matches!(self, CallOutcome::Accepted)
    }
}

/// Access to the orders, alert and update endpoints
///
/// Errors are reserved for transport and parse failures. A non-success
/// status is not an error: `fetch_orders` yields an empty list and the two
/// POST calls yield [`CallOutcome::Rejected`].
///
/// `fetch_orders` only checks that the body is a JSON array. Each entry is
/// decoded into an [`Order`] when it is processed, so one malformed entry
/// fails that order alone.
#[async_trait]
pub trait OrdersGateway: Send + Sync {
    /// Fetch the raw entries of the orders feed
    async fn fetch_orders(&self) -> Result<Vec<Value>>;

    /// Post one delivery alert to the alert endpoint
    async fn send_alert(&self, alert: &DeliveryAlert) -> Result<CallOutcome>;

    /// Post the full order to the update endpoint
    async fn update_order(&self, order: &Order) -> Result<CallOutcome>;
}
