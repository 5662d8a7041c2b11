//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels, with `RUST_LOG` taking precedence
//! - JSON-formatted local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use delivery_alerts::logging::init_logging;
//! use delivery_alerts::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of processing for one order
///
/// # Example
///
/// ```no_run
/// use delivery_alerts::log_order_start;
///
/// log_order_start!("42", 3);
/// ```
#[macro_export]
macro_rules! log_order_start {
    ($order_id:expr, $item_count:expr) => {
        tracing::debug!(
            order_id = %$order_id,
            item_count = $item_count,
            "Processing order"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use delivery_alerts::log_error_with_context;
/// use delivery_alerts::domain::DeliveryAlertsError;
///
/// let error = DeliveryAlertsError::Validation("counter overflow".to_string());
/// log_error_with_context!(&error, "order_id=42");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = %$context,
            "Error occurred"
        );
    };
}
