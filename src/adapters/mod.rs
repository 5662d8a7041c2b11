//! External system integrations for delivery-alerts.
//!
//! - [`orders`] - Orders, alert and update endpoints over HTTP
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind traits so the processing
//! logic can be tested with in-memory implementations.
//!
//! ```rust,no_run
//! use delivery_alerts::adapters::orders::{HttpOrdersGateway, OrdersGateway};
//! use delivery_alerts::config::load_config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("delivery-alerts.toml")?;
//! let gateway = HttpOrdersGateway::new(config.api_urls.clone(), &config.http)?;
//! let orders = gateway.fetch_orders().await?;
//! println!("{} orders", orders.len());
//! # Ok(())
//! # }
//! ```

pub mod orders;
