//! Validate config command implementation
//!
//! This module implements the `validate-config` command: loads the
//! configuration and reports on each endpoint without contacting it.

use crate::config::load_config;
use crate::core::endpoints::validate_api_endpoints;
use clap::Args;
use url::Url;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

/// Status of one configured endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointStatus {
    /// No URL configured
    Empty,
    /// Parses as an http(s) URL
    Valid,
    /// Set, but not an http(s) URL
    Malformed(String),
}

/// Classifies an endpoint URL
pub fn endpoint_status(url: &str) -> EndpointStatus {
    if url.is_empty() {
        return EndpointStatus::Empty;
    }
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => EndpointStatus::Valid,
        Ok(parsed) => EndpointStatus::Malformed(format!("unsupported scheme '{}'", parsed.scheme())),
        Err(e) => EndpointStatus::Malformed(e.to_string()),
    }
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!();
        println!("Endpoints:");
        let mut malformed = 0;
        for (name, url) in config.api_urls.entries() {
            match endpoint_status(url) {
                EndpointStatus::Empty => println!("  {name}: <empty>"),
                EndpointStatus::Valid => println!("  {name}: {url}"),
                EndpointStatus::Malformed(reason) => {
                    malformed += 1;
                    println!("  {name}: {url} (not a valid URL: {reason})");
                }
            }
        }

        println!();
        println!("Settings:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Request Timeout: {}s", config.http.timeout_seconds);
        println!("  Connect Timeout: {}s", config.http.connect_timeout_seconds);
        println!("  On Order Error: {}", config.processing.on_order_error);
        println!();

        if !validate_api_endpoints(&config.api_urls) {
            println!("API endpoints are not valid: every endpoint must be set");
            return Ok(2);
        }
        if malformed > 0 {
            println!("{malformed} endpoint(s) are not valid URLs");
            return Ok(2);
        }

        println!("Configuration is valid");
        Ok(0)
    }
}
