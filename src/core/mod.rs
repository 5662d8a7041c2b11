//! Core business logic for delivery-alerts.
//!
//! # Modules
//!
//! - [`endpoints`] - Endpoint presence check that gates every run
//! - [`processor`] - Alerting and counter updates for one order
//! - [`run`] - Run orchestration and summary
//!
//! # Run Workflow
//!
//! 1. **Validate**: all three endpoint URLs must be non-empty
//! 2. **Fetch**: one GET to the orders endpoint
//! 3. **Process**: alert on each delivered item and increment its counter
//! 4. **Update**: post each order back, one order at a time
//! 5. **Report**: return a run summary
//!
//! # Example
//!
//! ```rust,no_run
//! use delivery_alerts::config::load_config;
//! use delivery_alerts::core::run::RunCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("delivery-alerts.toml")?;
//! let coordinator = RunCoordinator::new(config)?;
//!
//! let summary = coordinator.run().await;
//! println!("Processed: {}", summary.orders_processed);
//! # Ok(())
//! # }
//! ```

pub mod endpoints;
pub mod processor;
pub mod run;

#[cfg(test)]
pub(crate) mod testing;
