//! Run coordinator - drives one pass over the orders feed
//!
//! The run is strictly sequential: validate endpoints, fetch all orders,
//! then for each order process it and post the update before moving on to
//! the next one.
//!
//! Feed entries are decoded one at a time. A malformed entry is an error for
//! that order only; orders before it have already been updated.

use crate::adapters::orders::{HttpOrdersGateway, OrdersGateway};
use crate::config::{DeliveryAlertsConfig, OrderErrorPolicy};
use crate::core::endpoints::{missing_endpoints, validate_api_endpoints};
use crate::core::processor::OrderProcessor;
use crate::core::run::summary::{RunState, RunSummary};
use crate::domain::{Order, OrderId, Result};
use crate::{log_error_with_context, log_order_start};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Run coordinator
pub struct RunCoordinator {
    config: DeliveryAlertsConfig,
    gateway: Arc<dyn OrdersGateway>,
    processor: OrderProcessor,
}

impl RunCoordinator {
    /// Create a coordinator talking to the configured HTTP endpoints
    ///
    /// No network call is made here.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: DeliveryAlertsConfig) -> Result<Self> {
        let gateway = Arc::new(HttpOrdersGateway::new(
            config.api_urls.clone(),
            &config.http,
        )?);
        Ok(Self::with_gateway(config, gateway))
    }

    /// Create a coordinator on top of an existing gateway
    pub fn with_gateway(config: DeliveryAlertsConfig, gateway: Arc<dyn OrdersGateway>) -> Self {
        let processor = OrderProcessor::new(gateway.clone());
        Self {
            config,
            gateway,
            processor,
        }
    }

    /// Execute one run
    ///
    /// Never returns an error: the outcome, including the message of an
    /// error that stopped the run, is reported in the returned summary.
    pub async fn run(&self) -> RunSummary {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("run", run_id = %run_id);
        self.execute(run_id).instrument(span).await
    }

    async fn execute(&self, run_id: Uuid) -> RunSummary {
        let start_time = Instant::now();
        let mut summary = RunSummary::new(run_id);

        tracing::info!("Start of run");

        summary.transition(RunState::Validating);
        if !validate_api_endpoints(&self.config.api_urls) {
            tracing::error!(
                missing = ?missing_endpoints(&self.config.api_urls),
                "API endpoints are not valid. Please check the configuration."
            );
            summary.transition(RunState::Aborted);
            return summary.with_duration(start_time.elapsed());
        }

        summary.transition(RunState::Running);
        match self.process_all(&mut summary).await {
            Ok(()) => {
                summary.transition(RunState::Done);
                tracing::info!(
                    orders_processed = summary.orders_processed,
                    "Results sent to relevant APIs."
                );
            }
            Err(e) => {
                tracing::error!("An error has occurred! Error provided: {e}");
                summary.fail(e.to_string());
            }
        }

        summary.with_duration(start_time.elapsed())
    }

    /// Fetch and handle every order, honouring the per-order error policy
    async fn process_all(&self, summary: &mut RunSummary) -> Result<()> {
        let orders = self.gateway.fetch_orders().await?;
        summary.orders_fetched = orders.len();

        if orders.is_empty() {
            tracing::info!("No orders to process");
        }

        for (index, raw) in orders.into_iter().enumerate() {
            let position = index + 1;
            let order_id = OrderId::from_raw(&raw);

            match self.process_and_update(raw, summary).await {
                Ok(()) => summary.orders_processed += 1,
                Err(e) => match self.config.processing.on_order_error {
                    OrderErrorPolicy::Abort => return Err(e),
                    OrderErrorPolicy::Continue => {
                        let failure =
                            summary.record_order_failure(position, order_id, e.to_string());
                        log_error_with_context!(e, format!("order={}", failure.label()));
                    }
                },
            }
        }

        Ok(())
    }

    async fn process_and_update(&self, raw: Value, summary: &mut RunSummary) -> Result<()> {
        let mut order = Order::from_raw(raw)?;
        log_order_start!(order.order_id, order.items.len());

        let report = self.processor.process_order(&mut order).await?;
        summary.record_processing(&report);

        let outcome = self.gateway.update_order(&order).await?;
        summary.record_update(outcome);

        Ok(())
    }
}
