//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "delivery-alerts.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Set the three URLs under [api_urls] in {}", self.output);
                println!("  2. Validate configuration: delivery-alerts validate-config");
                println!("  3. Start a run: delivery-alerts run");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Sample configuration with every setting at its default
    fn generate_config() -> String {
        r#"# delivery-alerts configuration
#
# Values may reference environment variables with ${VAR_NAME}.
# Any key can also be overridden with DELIVERY_ALERTS_<SECTION>_<KEY>,
# for example DELIVERY_ALERTS_API_URLS_ORDERS_API.

[application]
# trace, debug, info, warn, error
log_level = "info"

[api_urls]
# All three must be set, otherwise a run stops before any request is made
orders_api = "https://orders-api.com/orders"
alert_api = "https://alert-api.com/alerts"
update_api = "https://update-api.com/update"

[http]
timeout_seconds = 30
connect_timeout_seconds = 10

[processing]
# abort: stop the run at the first order that fails
# continue: log the failed order and move on to the next one
on_order_error = "abort"

[logging]
local_enabled = false
local_path = "./logs"
# daily, hourly, never
local_rotation = "daily"
"#
        .to_string()
    }
}
