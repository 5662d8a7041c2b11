//! Run summary and reporting
//!
//! This module defines structures for tracking and reporting the result of
//! one run.

use crate::adapters::orders::CallOutcome;
use crate::core::processor::ProcessingReport;
use crate::domain::OrderId;
use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Lifecycle of a run
///
/// `Idle -> Validating -> Running -> Done`, with `Aborted` when endpoint
/// validation fails and `Failed` when an error ends the run early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Created, not started
    Idle,
    /// Checking endpoint configuration
    Validating,
    /// Fetching and processing orders
    Running,
    /// All fetched orders handled
    Done,
    /// Endpoint validation failed; no network calls were made
    Aborted,
    /// An error stopped the run
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Idle => "idle",
            RunState::Validating => "validating",
            RunState::Running => "running",
            RunState::Done => "done",
            RunState::Aborted => "aborted",
            RunState::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

/// An order that failed while the run continued past it
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFailure {
    /// 1-based position of the entry in the orders feed
    pub position: usize,
    /// Order identifier, when the entry carries a usable one
    pub order_id: Option<OrderId>,
    /// Error message
    pub message: String,
}

impl OrderFailure {
    /// Order id if known, otherwise the feed position as `#<n>`
    pub fn label(&self) -> String {
        match &self.order_id {
            Some(id) => id.to_string(),
            None => format!("#{}", self.position),
        }
    }
}

/// Summary of a run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Identifier attached to every log line of the run
    pub run_id: Uuid,

    /// Wall-clock start time
    pub started_at: DateTime<Utc>,

    /// Final (or current) state
    pub state: RunState,

    /// Orders returned by the orders endpoint
    pub orders_fetched: usize,

    /// Orders processed and posted to the update endpoint
    pub orders_processed: usize,

    /// Items found in delivered status
    pub delivered_items: usize,

    /// Alerts accepted by the alert endpoint
    pub alerts_sent: usize,

    /// Alerts answered with a non-success status
    pub alerts_rejected: usize,

    /// Updates accepted by the update endpoint
    pub updates_sent: usize,

    /// Updates answered with a non-success status
    pub updates_rejected: usize,

    /// Orders skipped after an error
    pub order_failures: Vec<OrderFailure>,

    /// Error that stopped the run, if any
    pub error: Option<String>,

    /// Duration of the run
    pub duration: Duration,
}

impl RunSummary {
    /// Create a new summary in the `Idle` state
    pub fn new(run_id: Uuid) -> Self {
        Self {
            run_id,
            started_at: Utc::now(),
            state: RunState::Idle,
            orders_fetched: 0,
            orders_processed: 0,
            delivered_items: 0,
            alerts_sent: 0,
            alerts_rejected: 0,
            updates_sent: 0,
            updates_rejected: 0,
            order_failures: Vec::new(),
            error: None,
            duration: Duration::from_secs(0),
        }
    }

    /// Move to `state`
    pub fn transition(&mut self, state: RunState) {
        tracing::debug!(from = %self.state, to = %state, "Run state changed");
        self.state = state;
    }

    /// Move to `Failed`, keeping the error message
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.transition(RunState::Failed);
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Add the counts from one processed order
    pub fn record_processing(&mut self, report: &ProcessingReport) {
        self.delivered_items += report.delivered_items;
        self.alerts_sent += report.alerts_sent;
        self.alerts_rejected += report.alerts_rejected;
    }

    /// Count one update call
    pub fn record_update(&mut self, outcome: CallOutcome) {
        match outcome {
            CallOutcome::Accepted => self.updates_sent += 1,
            CallOutcome::Rejected { .. } => self.updates_rejected += 1,
        }
    }

    /// Record an order skipped after an error
    pub fn record_order_failure(
        &mut self,
        position: usize,
        order_id: Option<OrderId>,
        message: impl Into<String>,
    ) -> &OrderFailure {
        self.order_failures.push(OrderFailure {
            position,
            order_id,
            message: message.into(),
        });
        &self.order_failures[self.order_failures.len() - 1]
    }

    /// Check if the run finished with every call accepted
    pub fn is_successful(&self) -> bool {
        self.state == RunState::Done
            && self.order_failures.is_empty()
            && self.alerts_rejected == 0
            && self.updates_rejected == 0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            run_id = %self.run_id,
            started_at = %self.started_at.to_rfc3339(),
            state = %self.state,
            orders_fetched = self.orders_fetched,
            orders_processed = self.orders_processed,
            delivered_items = self.delivered_items,
            alerts_sent = self.alerts_sent,
            alerts_rejected = self.alerts_rejected,
            updates_sent = self.updates_sent,
            updates_rejected = self.updates_rejected,
            duration_ms = self.duration.as_millis() as u64,
            "Run finished"
        );

        if !self.order_failures.is_empty() {
            tracing::warn!(
                failure_count = self.order_failures.len(),
                "Run completed with failed orders"
            );
            for failure in &self.order_failures {
                tracing::warn!(
                    order = %failure.label(),
                    position = failure.position,
                    message = %failure.message,
                    "Order failed"
                );
            }
        }
    }
}
