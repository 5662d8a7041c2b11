//! Orders API integration
//!
//! Talks to the three configured endpoints:
//! - orders (GET, JSON array of orders)
//! - alert (POST, `{"Message": ...}`)
//! - update (POST, full order)

pub mod client;
pub mod gateway;
pub mod models;

pub use client::HttpOrdersGateway;
pub use gateway::{CallOutcome, OrdersGateway};
pub use models::{AlertPayload, DeliveryAlert};
