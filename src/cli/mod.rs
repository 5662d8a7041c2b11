//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for delivery-alerts using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// delivery-alerts - alert on delivered order items and post updated orders
#[derive(Parser, Debug)]
#[command(name = "delivery-alerts")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        default_value = "delivery-alerts.toml",
        env = "DELIVERY_ALERTS_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DELIVERY_ALERTS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch orders, send delivery alerts and post updated orders
    Run(commands::run::RunArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
