//! Domain error types
//!
//! This module defines the error hierarchy for delivery-alerts.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main delivery-alerts error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum DeliveryAlertsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Orders API errors (fetch, alert, update)
    #[error("Orders API error: {0}")]
    OrdersApi(#[from] OrdersApiError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors raised while talking to the orders, alert and update endpoints.
///
/// A non-success status on the alert or update call is not an error; it is
/// reported as a [`CallOutcome`](crate::adapters::orders::CallOutcome).
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum OrdersApiError {
    /// Failed to reach the endpoint
    #[error("Failed to connect to {endpoint}: {message}")]
    ConnectionFailed { endpoint: String, message: String },

    /// Request timed out
    #[error("Request to {0} timed out")]
    Timeout(String),

    /// Response body could not be parsed
    #[error("Invalid response from {endpoint}: {message}")]
    InvalidResponse { endpoint: String, message: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl OrdersApiError {
    /// Classifies a transport error from the HTTP client
    pub(crate) fn from_transport(endpoint: &str, err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            OrdersApiError::Timeout(endpoint.to_string())
        } else {
            OrdersApiError::ConnectionFailed {
                endpoint: endpoint.to_string(),
                message: err.to_string(),
            }
        }
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for DeliveryAlertsError {
    fn from(err: serde_json::Error) -> Self {
        DeliveryAlertsError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for DeliveryAlertsError {
    fn from(err: toml::de::Error) -> Self {
        DeliveryAlertsError::Configuration(format!("TOML parse error: {err}"))
    }
}
