//! Run command implementation
//!
//! This module implements the `run` command: one pass over the orders feed.

use crate::config::{load_config, OrderErrorPolicy};
use crate::core::run::{RunCoordinator, RunState, RunSummary};
use clap::Args;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Override the per-order failure policy (abort or continue)
    #[arg(long, value_name = "POLICY")]
    pub on_order_error: Option<OrderErrorPolicy>,
}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting run command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        if let Some(policy) = self.on_order_error {
            tracing::info!(policy = %policy, "Overriding order error policy from CLI");
            config.processing.on_order_error = policy;
        }

        let coordinator = match RunCoordinator::new(config) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize run");
                eprintln!("Failed to initialize run: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        let summary = coordinator.run().await;
        summary.log_summary();
        print_summary(&summary);

        Ok(exit_code(&summary))
    }
}

fn print_summary(summary: &RunSummary) {
    println!();
    println!("Run Summary ({}):", summary.run_id);
    println!("  Started: {}", summary.started_at.to_rfc3339());
    println!("  State: {}", summary.state);
    println!("  Orders Fetched: {}", summary.orders_fetched);
    println!("  Orders Processed: {}", summary.orders_processed);
    println!("  Delivered Items: {}", summary.delivered_items);
    println!(
        "  Alerts Sent: {} (rejected: {})",
        summary.alerts_sent, summary.alerts_rejected
    );
    println!(
        "  Updates Sent: {} (rejected: {})",
        summary.updates_sent, summary.updates_rejected
    );
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());

    if !summary.order_failures.is_empty() {
        println!();
        println!("Failed orders:");
        for failure in &summary.order_failures {
            println!("  - {}: {}", failure.label(), failure.message);
        }
    }

    if let Some(error) = &summary.error {
        println!();
        println!("Error: {error}");
    }
    println!();
}

/// Maps a finished run to a process exit code
///
/// - 0: done (rejected alerts or updates are warnings only)
/// - 1: done, but some orders were skipped after an error
/// - 2: aborted because an endpoint is not configured
/// - 5: an error stopped the run
pub fn exit_code(summary: &RunSummary) -> i32 {
    match summary.state {
        RunState::Done if !summary.order_failures.is_empty() => 1,
        RunState::Done => 0,
        RunState::Aborted => 2,
        RunState::Failed => 5,
        RunState::Idle | RunState::Validating | RunState::Running => 5,
    }
}
