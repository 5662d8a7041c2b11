//! Configuration schema types
//!
//! This module defines the configuration structure for delivery-alerts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Main delivery-alerts configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section has defaults so that a file holding only `[api_urls]`
/// (or nothing at all, with environment overrides) is accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryAlertsConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Orders, alert and update endpoint URLs
    #[serde(default)]
    pub api_urls: ApiUrlsConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Per-order processing settings
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DeliveryAlertsConfig {
    /// Validates the configuration
    ///
    /// Endpoint URLs are not checked here. Empty endpoints are reported by
    /// [`validate_api_endpoints`](crate::core::endpoints::validate_api_endpoints)
    /// when a run starts, which aborts the run without any network call.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.http.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Endpoint URLs
///
/// Missing keys deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUrlsConfig {
    /// GET endpoint returning the JSON array of orders
    #[serde(default)]
    pub orders_api: String,

    /// POST endpoint receiving `{"Message": ...}` alerts
    #[serde(default)]
    pub alert_api: String,

    /// POST endpoint receiving updated orders
    #[serde(default)]
    pub update_api: String,
}

impl ApiUrlsConfig {
    /// Creates an endpoint set from the three URLs
    pub fn new(
        orders_api: impl Into<String>,
        alert_api: impl Into<String>,
        update_api: impl Into<String>,
    ) -> Self {
        Self {
            orders_api: orders_api.into(),
            alert_api: alert_api.into(),
            update_api: update_api.into(),
        }
    }

    /// Endpoints as `(name, url)` pairs, in orders/alert/update order
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("orders_api", self.orders_api.as_str()),
            ("alert_api", self.alert_api.as_str()),
            ("update_api", self.update_api.as_str()),
        ]
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Total request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
        }
    }
}

impl HttpConfig {
    fn validate(&self) -> Result<(), String> {
        if self.timeout_seconds == 0 {
            return Err("http.timeout_seconds must be > 0".to_string());
        }
        if self.connect_timeout_seconds == 0 {
            return Err("http.connect_timeout_seconds must be > 0".to_string());
        }
        if self.connect_timeout_seconds > self.timeout_seconds {
            return Err(format!(
                "http.connect_timeout_seconds ({}) cannot exceed http.timeout_seconds ({})",
                self.connect_timeout_seconds, self.timeout_seconds
            ));
        }
        Ok(())
    }
}

/// What to do when processing or updating one order fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderErrorPolicy {
    /// Stop the run at the first failing order
    #[default]
    Abort,
    /// Record the failure and move on to the next order
    Continue,
}

impl FromStr for OrderErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(OrderErrorPolicy::Abort),
            "continue" => Ok(OrderErrorPolicy::Continue),
            other => Err(format!(
                "Invalid order error policy '{other}'. Must be one of: abort, continue"
            )),
        }
    }
}

impl fmt::Display for OrderErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderErrorPolicy::Abort => write!(f, "abort"),
            OrderErrorPolicy::Continue => write!(f, "continue"),
        }
    }
}

/// Processing configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Failure policy for a single order
    #[serde(default)]
    pub on_order_error: OrderErrorPolicy,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_connect_timeout_seconds() -> u64 {
    10
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
