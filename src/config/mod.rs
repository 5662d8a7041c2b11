//! Configuration management for delivery-alerts.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! delivery-alerts uses a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`DELIVERY_ALERTS_<SECTION>_<KEY>`)
//! - Default values for every optional setting
//! - Type-safe configuration structs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use delivery_alerts::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("delivery-alerts.toml")?;
//!
//! println!("Orders API: {}", config.api_urls.orders_api);
//! println!("On order error: {}", config.processing.on_order_error);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`ApiUrlsConfig`] - Orders, alert and update endpoints
//! - [`HttpConfig`] - Request and connect timeouts
//! - [`ProcessingConfig`] - Per-order failure policy
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [api_urls]
//! orders_api = "https://orders-api.com/orders"
//! alert_api = "https://alert-api.com/alerts"
//! update_api = "${UPDATE_API_URL}"
//!
//! [processing]
//! on_order_error = "abort"
//! ```
//!
//! Endpoint URLs that are missing from the file are read as empty strings.
//! They are not rejected at load time; a run with an empty endpoint is
//! aborted before any network call.

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_from_str};
pub use schema::{
    ApiUrlsConfig, ApplicationConfig, DeliveryAlertsConfig, HttpConfig, LoggingConfig,
    OrderErrorPolicy, ProcessingConfig,
};
