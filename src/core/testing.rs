//! In-memory gateway used by unit tests

use crate::adapters::orders::{CallOutcome, DeliveryAlert, OrdersGateway};
use crate::domain::{Order, OrderId, OrdersApiError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Serves a fixed order feed and records every alert and update
pub(crate) struct RecordingGateway {
    feed: Vec<Value>,
    alert_status: u16,
    update_status: u16,
    fail_alerts: bool,
    fail_update_for: Option<OrderId>,
    fetch_calls: AtomicUsize,
    alerts: Mutex<Vec<DeliveryAlert>>,
    updates: Mutex<Vec<Order>>,
}

impl RecordingGateway {
    pub(crate) fn new(orders: Vec<Order>) -> Self {
        Self::from_feed(
            orders
                .iter()
                .map(|order| serde_json::to_value(order).unwrap())
                .collect(),
        )
    }

    /// Serves raw feed entries, which need not be valid orders
    pub(crate) fn from_feed(feed: Vec<Value>) -> Self {
        Self {
            feed,
            alert_status: 200,
            update_status: 200,
            fail_alerts: false,
            fail_update_for: None,
            fetch_calls: AtomicUsize::new(0),
            alerts: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_alert_status(mut self, status: u16) -> Self {
        self.alert_status = status;
        self
    }

    pub(crate) fn with_update_status(mut self, status: u16) -> Self {
        self.update_status = status;
        self
    }

    /// Every alert fails at the transport level
    pub(crate) fn with_failing_alerts(mut self) -> Self {
        self.fail_alerts = true;
        self
    }

    /// The update for `order_id` fails at the transport level
    pub(crate) fn with_failing_update(mut self, order_id: impl Into<OrderId>) -> Self {
        self.fail_update_for = Some(order_id.into());
        self
    }

    pub(crate) fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn alerts(&self) -> Vec<DeliveryAlert> {
        self.alerts.lock().unwrap().clone()
    }

    pub(crate) fn updates(&self) -> Vec<Order> {
        self.updates.lock().unwrap().clone()
    }

    fn refused(endpoint: &str) -> OrdersApiError {
        OrdersApiError::ConnectionFailed {
            endpoint: endpoint.to_string(),
            message: "connection refused".to_string(),
        }
    }
}

#[async_trait]
impl OrdersGateway for RecordingGateway {
    async fn fetch_orders(&self) -> Result<Vec<Value>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.feed.clone())
    }

    async fn send_alert(&self, alert: &DeliveryAlert) -> Result<CallOutcome> {
        if self.fail_alerts {
            return Err(Self::refused("alert").into());
        }
        self.alerts.lock().unwrap().push(alert.clone());
        Ok(CallOutcome::from_status(self.alert_status))
    }

    async fn update_order(&self, order: &Order) -> Result<CallOutcome> {
        if self.fail_update_for.as_ref() == Some(&order.order_id) {
            return Err(Self::refused("update").into());
        }
        self.updates.lock().unwrap().push(order.clone());
        Ok(CallOutcome::from_status(self.update_status))
    }
}
