// delivery-alerts - Delivered order item alerting job
// Copyright (c) 2025 Delivery Alerts Contributors
// Licensed under the MIT License

//! # delivery-alerts
//!
//! delivery-alerts is a batch job for medical-equipment orders. It fetches the
//! current orders from a remote API, sends an alert for every line item in
//! "Delivered" status, increments that item's delivery-notification counter,
//! and posts each updated order back to an update API.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Endpoint validation, order processing and run orchestration
//! - [`adapters`] - HTTP access to the orders, alert and update endpoints
//! - [`domain`] - Order records and error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use delivery_alerts::config::load_config;
//! use delivery_alerts::core::run::RunCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("delivery-alerts.toml")?;
//!     let coordinator = RunCoordinator::new(config)?;
//!
//!     let summary = coordinator.run().await;
//!     println!("Alerts sent: {}", summary.alerts_sent);
//!     Ok(())
//! }
//! ```
//!
//! ## Processing Rules
//!
//! - An item is delivered when its status equals "Delivered", ignoring case.
//! - Each delivered item gets one alert carrying its counter value before the
//!   increment; the counter then rises by exactly one.
//! - Every fetched order is posted to the update endpoint exactly once, even
//!   when none of its items were delivered.
//! - Orders are handled one at a time, in feed order.
//!
//! ## Error Handling
//!
//! A non-success status from the orders endpoint means there is no work to do.
//! A non-success status from the alert or update endpoint is logged and
//! counted, and processing continues. Transport and parse failures are
//! [`domain::DeliveryAlertsError`] values. A feed that is not a JSON array
//! ends the run. A failure tied to one order (a malformed entry, a failed
//! alert or update call) ends the run unless the `continue` order error
//! policy is configured.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
