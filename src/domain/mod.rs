//! Domain models and types for delivery-alerts.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Order records** ([`Order`], [`Item`], [`OrderId`])
//! - **Error types** ([`DeliveryAlertsError`], [`OrdersApiError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use delivery_alerts::domain::{Item, Order};
//! use serde_json::json;
//!
//! let order = Order::from_raw(json!({
//!     "OrderId": 1,
//!     "Items": [{"Description": "Wheelchair", "Status": "delivered", "deliveryNotification": 0}]
//! }))?;
//! assert_eq!(order, Order::new(1u64, vec![Item::new("Wheelchair", "delivered", 0)]));
//! assert!(order.items[0].is_delivered());
//! # Ok::<(), delivery_alerts::domain::DeliveryAlertsError>(())
//! ```

pub mod errors;
pub mod order;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{DeliveryAlertsError, OrdersApiError};
pub use order::{Item, Order, OrderId, DELIVERED_STATUS};
pub use result::Result;
